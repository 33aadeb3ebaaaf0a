//! # Sources Crate
//!
//! The upstream services the client reads from, expressed as traits:
//!
//! ### CatalogClient (remote)
//! - `get_items`: every item of a library
//! - `home`: the server-curated home feed rows
//!
//! ### OfflineStore (local)
//! - `downloaded_audiobooks`: items available offline, across libraries
//!
//! ### Playback events
//! A broadcast channel of `PlaybackEvent`; the home screen refreshes when an
//! item finishes.
//!
//! `SnapshotSource` implements both traits over a `LibrarySnapshot` loaded
//! from disk.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogClient, OfflineStore, SnapshotSource};
//!
//! let source = SnapshotSource::load(Path::new("data/sample-library"))?;
//! let home = source.home("lib-books").await?;
//! let downloads = source.downloaded_audiobooks().await?;
//! ```

// Public modules
pub mod error;
pub mod events;
pub mod snapshot;
pub mod traits;

// Re-export commonly used types
pub use error::{FetchError, FetchResult};
pub use events::{PlaybackEvent, playback_channel};
pub use snapshot::SnapshotSource;
pub use traits::{CatalogClient, OfflineStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let remote = FetchError::FetchFailed("timeout".to_string());
        let local = FetchError::LocalFetchFailed("disk".to_string());

        assert_eq!(remote.to_string(), "Remote fetch failed: timeout");
        assert_eq!(local.to_string(), "Local fetch failed: disk");
    }
}
