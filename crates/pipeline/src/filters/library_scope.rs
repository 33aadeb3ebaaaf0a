//! Filter that restricts items to a single library.
//!
//! The offline store returns downloads from every library; the home screen
//! only shows the ones belonging to the library being browsed.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{Audiobook, LibraryId};

pub struct LibraryScopeFilter {
    library_id: LibraryId,
}

impl LibraryScopeFilter {
    pub fn new(library_id: impl Into<LibraryId>) -> Self {
        Self {
            library_id: library_id.into(),
        }
    }
}

impl Filter for LibraryScopeFilter {
    fn name(&self) -> &str {
        "LibraryScopeFilter"
    }

    fn apply(&self, items: Vec<Audiobook>) -> Result<Vec<Audiobook>> {
        Ok(items
            .into_iter()
            .filter(|item| item.library_id == self.library_id)
            .collect())
    }
}
