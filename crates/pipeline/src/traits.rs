//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to lists of audiobooks.

use anyhow::Result;
use catalog::Audiobook;

/// Core trait for filtering audiobooks.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across refresh tasks
/// - Filters take ownership of the Vec<Audiobook> and return a filtered Vec
/// - A filter only drops items; it never reorders the ones it keeps
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of items.
    ///
    /// # Arguments
    /// * `items` - The items to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<Audiobook>)` - The retained items, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, items: Vec<Audiobook>) -> Result<Vec<Audiobook>>;
}
