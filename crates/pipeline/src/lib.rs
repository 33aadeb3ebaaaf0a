//! Filtering, sorting and home-feed composition for an audiobook library.
//!
//! This crate provides:
//! - Filter trait and implementations for list filtering
//! - FilterPipeline for composing filters
//! - `filter_and_sort` for the library list
//! - `compose_home_rows` for the home screen
//! - `Preferences`, the read-only snapshot both are driven by
//!
//! Everything here is synchronous and free of I/O apart from
//! `Preferences::load`, so it can be called from any thread.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_and_sort, compose_home_rows, Preferences};
//!
//! let preferences = Preferences::load(Path::new("preferences.json"))?;
//!
//! let visible = filter_and_sort(
//!     items,
//!     preferences.filter,
//!     preferences.sort_field,
//!     preferences.ascending,
//!     &preferences.selected_genres,
//! )?;
//!
//! let feed = compose_home_rows(
//!     home.audiobook_rows,
//!     home.author_rows,
//!     downloads,
//!     &preferences.home_config(),
//! )?;
//! ```

pub mod criterion;
pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod home;
pub mod preferences;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criterion::{FilterCriterion, SortField};
pub use engine::{available_genres, filter_and_sort, visible_items};
pub use error::PipelineError;
pub use filter_pipeline::FilterPipeline;
pub use home::{HomeConfig, HomeFeed, compose_home_rows};
pub use preferences::{DisplayMode, Preferences};
pub use sort::sort_items;
pub use traits::Filter;
