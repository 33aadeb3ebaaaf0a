//! Refresh controllers for the home and library screens.
//!
//! This crate wires the sources to the pipeline: it decides when data is
//! fetched, keeps the latest results in a `tokio::sync::watch` channel, and
//! hands them to the pipeline on demand.

pub mod home;
pub mod library;
pub mod state;

pub use home::{HomeController, RefreshHandles};
pub use library::LibraryController;
pub use state::{FeedState, LibraryState, Phase};
