//! A catalog client and offline store backed by a library snapshot.
//!
//! Serves one library from memory. Requests for any other library id fail
//! the way an unknown library fails on a real server.

use crate::error::{FetchError, FetchResult};
use crate::traits::{CatalogClient, OfflineStore};
use catalog::{Audiobook, HomeResponse, LibrarySnapshot};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct SnapshotSource {
    /// Shared, read-only snapshot
    snapshot: Arc<LibrarySnapshot>,
}

impl SnapshotSource {
    pub fn new(snapshot: LibrarySnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Load the snapshot directory and serve it.
    pub fn load(dir: &Path) -> catalog::Result<Self> {
        Ok(Self::new(LibrarySnapshot::load_from_dir(dir)?))
    }

    pub fn snapshot(&self) -> &LibrarySnapshot {
        &self.snapshot
    }

    fn check_library(&self, library_id: &str) -> FetchResult<()> {
        if library_id == self.snapshot.library.id {
            Ok(())
        } else {
            Err(FetchError::FetchFailed(format!(
                "library {} not found",
                library_id
            )))
        }
    }
}

impl CatalogClient for SnapshotSource {
    #[instrument(skip(self))]
    async fn get_items(&self, library_id: &str) -> FetchResult<Vec<Audiobook>> {
        self.check_library(library_id)?;
        debug!("Serving {} items", self.snapshot.items.len());
        Ok(self.snapshot.items.clone())
    }

    #[instrument(skip(self))]
    async fn home(&self, library_id: &str) -> FetchResult<HomeResponse> {
        self.check_library(library_id)?;
        Ok(self.snapshot.home.clone())
    }
}

impl OfflineStore for SnapshotSource {
    async fn downloaded_audiobooks(&self) -> FetchResult<Vec<Audiobook>> {
        Ok(self.snapshot.downloads.clone())
    }
}
