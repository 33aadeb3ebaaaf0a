//! # Catalog Crate
//!
//! Domain types shared by every other crate in the workspace, plus loading
//! of library snapshots from JSON files.
//!
//! ## Main Components
//!
//! - **types**: `Audiobook`, `Author`, `HomeRow<T>`, `HomeResponse`, `Library`
//! - **snapshot**: `LibrarySnapshot::load_from_dir`
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::LibrarySnapshot;
//! use std::path::Path;
//!
//! let snapshot = LibrarySnapshot::load_from_dir(Path::new("data/sample-library"))?;
//! println!("{} has {} items", snapshot.library.name, snapshot.items.len());
//! ```

pub mod error;
pub mod snapshot;
pub mod types;

pub use error::{CatalogError, Result};
pub use snapshot::LibrarySnapshot;
pub use types::{
    // Type aliases
    ItemId,
    LibraryId,
    // Core types
    Audiobook,
    Author,
    HomeResponse,
    HomeRow,
    Library,
};
