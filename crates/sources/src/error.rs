//! Errors reported by upstream data sources.

use thiserror::Error;

/// Why a fetch from an upstream source failed.
///
/// The two variants are handled differently by callers: a remote failure is
/// surfaced to the user, a local one degrades to "no downloads".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The remote catalog could not deliver items or the home feed
    #[error("Remote fetch failed: {0}")]
    FetchFailed(String),

    /// The offline store could not list downloaded items
    #[error("Local fetch failed: {0}")]
    LocalFetchFailed(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
