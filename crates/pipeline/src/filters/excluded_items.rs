//! Filter that removes items by id.
//!
//! Used for the user's "hide from continue listening" list.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{Audiobook, ItemId};
use std::collections::HashSet;

/// Removes items whose id is in the exclusion set.
///
/// ## Algorithm
/// Uses a HashSet for O(1) lookups.
pub struct ExcludedItemsFilter {
    excluded: HashSet<ItemId>,
}

impl ExcludedItemsFilter {
    pub fn new(excluded: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }
}

impl Filter for ExcludedItemsFilter {
    fn name(&self) -> &str {
        "ExcludedItemsFilter"
    }

    fn apply(&self, items: Vec<Audiobook>) -> Result<Vec<Audiobook>> {
        let filtered: Vec<Audiobook> = items
            .into_iter()
            .filter(|item| !self.excluded.contains(&item.id))
            .collect();
        Ok(filtered)
    }
}
