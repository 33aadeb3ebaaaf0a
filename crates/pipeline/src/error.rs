//! Errors raised when turning user-facing tags into engine options.

use thiserror::Error;

/// A tag that does not name a known option.
///
/// These indicate a caller bug or a corrupted preferences file. They are
/// reported instead of silently falling back to an empty or unsorted list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Unknown filter criterion: {0}")]
    UnknownCriterion(String),

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown display mode: {0}")]
    UnknownDisplayMode(String),
}
