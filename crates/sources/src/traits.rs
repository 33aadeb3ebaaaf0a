//! Contracts for the services the client reads from.
//!
//! The network client and the offline store are not implemented in this
//! workspace beyond `SnapshotSource`. Anything implementing these traits can
//! drive the refresh controllers.

use crate::error::FetchResult;
use catalog::{Audiobook, HomeResponse};
use std::future::Future;

/// The remote catalog.
///
/// ## Design Note
/// Returned futures are `Send` so callers can `tokio::spawn` them.
pub trait CatalogClient: Send + Sync + 'static {
    /// Every item in a library.
    fn get_items(
        &self,
        library_id: &str,
    ) -> impl Future<Output = FetchResult<Vec<Audiobook>>> + Send;

    /// The server-curated home feed of a library.
    fn home(&self, library_id: &str) -> impl Future<Output = FetchResult<HomeResponse>> + Send;
}

/// The on-device store of downloaded items.
pub trait OfflineStore: Send + Sync + 'static {
    /// Every downloaded audiobook, across all libraries.
    fn downloaded_audiobooks(&self) -> impl Future<Output = FetchResult<Vec<Audiobook>>> + Send;
}
