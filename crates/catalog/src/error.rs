//! Error types for the catalog crate.
//!
//! Everything that can go wrong while reading a library snapshot from disk
//! ends up here. Callers further up the stack wrap these in `anyhow` with
//! extra context.

use thiserror::Error;

/// Errors that can occur while loading catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required snapshot file does not exist
    #[error("Snapshot file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A snapshot file was not valid JSON for the expected shape
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Data was well-formed but inconsistent
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
