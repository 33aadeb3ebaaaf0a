//! Filter implementations for the list pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod criterion;
pub mod excluded_items;
pub mod genre_intersection;
pub mod library_scope;

// Re-export for convenience
pub use criterion::CriterionFilter;
pub use excluded_items::ExcludedItemsFilter;
pub use genre_intersection::GenreIntersectionFilter;
pub use library_scope::LibraryScopeFilter;
