//! The library list: filter, sort, then narrow by genre.

use crate::criterion::{FilterCriterion, SortField};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CriterionFilter, GenreIntersectionFilter};
use crate::preferences::Preferences;
use crate::sort::sort_items;
use anyhow::Result;
use catalog::Audiobook;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// Produce the ordered list of items to display.
///
/// ## Algorithm
/// 1. Keep items matching `criterion`
/// 2. Stable sort by `field`, inverted when `ascending` is false
/// 3. If any genre is selected, keep only items covering the genre
///    universe of the full input (see `GenreIntersectionFilter`)
///
/// The selected genres only switch step 3 on. The universe comes from
/// `items` as given, before step 1 removes anything.
#[instrument(skip(items, selected_genres), fields(input = items.len()))]
pub fn filter_and_sort(
    items: Vec<Audiobook>,
    criterion: FilterCriterion,
    field: SortField,
    ascending: bool,
    selected_genres: &HashSet<String>,
) -> Result<Vec<Audiobook>> {
    let genre_filter =
        (!selected_genres.is_empty()).then(|| GenreIntersectionFilter::from_pool(&items));

    let mut visible = FilterPipeline::new()
        .add_filter(CriterionFilter::new(criterion))
        .apply(items)?;

    sort_items(&mut visible, field, ascending);
    debug!("Sorted {} items by {} (ascending: {})", visible.len(), field, ascending);

    FilterPipeline::new()
        .add_optional_filter(genre_filter)
        .apply(visible)
}

/// `filter_and_sort` driven entirely by a preferences snapshot.
pub fn visible_items(items: Vec<Audiobook>, preferences: &Preferences) -> Result<Vec<Audiobook>> {
    filter_and_sort(
        items,
        preferences.filter,
        preferences.sort_field,
        preferences.ascending,
        &preferences.selected_genres,
    )
}

/// Every genre present in `items`, sorted and de-duplicated.
///
/// This is the list the genre picker offers.
pub fn available_genres(items: &[Audiobook]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.genres.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
