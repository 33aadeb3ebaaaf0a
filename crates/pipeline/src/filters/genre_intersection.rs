//! Filter that narrows the library to items covering a genre universe.
//!
//! The universe is the union of every genre present in the candidate pool,
//! and an item is kept only when the number of its distinct genres found in
//! the universe equals the size of the universe. In other words it must
//! carry *every* genre in the pool, not just overlap it. Repeated labels
//! count once. Items with no genres are always dropped.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Audiobook;
use std::collections::HashSet;

/// Keeps items whose genres cover the whole universe.
///
/// ## Algorithm
/// 1. Build the universe from the pool (`from_pool`) or take it as given
/// 2. For each item, count distinct genres contained in the universe
/// 3. Keep the item if it has genres and the count equals the universe size
pub struct GenreIntersectionFilter {
    universe: HashSet<String>,
}

impl GenreIntersectionFilter {
    /// Derive the universe from every genre appearing in `pool`.
    pub fn from_pool(pool: &[Audiobook]) -> Self {
        let universe = pool
            .iter()
            .flat_map(|item| item.genres.iter().cloned())
            .collect();
        Self { universe }
    }

    pub fn new(universe: impl IntoIterator<Item = String>) -> Self {
        Self {
            universe: universe.into_iter().collect(),
        }
    }

    pub fn universe(&self) -> &HashSet<String> {
        &self.universe
    }

    fn covers(&self, item: &Audiobook) -> bool {
        if item.genres.is_empty() {
            return false;
        }

        let matches: HashSet<&String> = item
            .genres
            .iter()
            .filter(|genre| self.universe.contains(*genre))
            .collect();
        matches.len() == self.universe.len()
    }
}

impl Filter for GenreIntersectionFilter {
    fn name(&self) -> &str {
        "GenreIntersectionFilter"
    }

    fn apply(&self, items: Vec<Audiobook>) -> Result<Vec<Audiobook>> {
        let filtered: Vec<Audiobook> = items
            .into_iter()
            .filter(|item| self.covers(item))
            .collect();
        Ok(filtered)
    }
}
