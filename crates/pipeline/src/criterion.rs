//! Filter criteria and sort fields selectable in the library view.
//!
//! Both are persisted as short kebab-case tags ("unfinished",
//! "last-played"). Parsing an unknown tag is an error.

use crate::error::PipelineError;
use catalog::Audiobook;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Filter Criterion
// =============================================================================

/// Which family of items to keep before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterCriterion {
    #[default]
    All,
    Finished,
    Unfinished,
    Favorites,
}

impl FilterCriterion {
    pub const ALL: [FilterCriterion; 4] = [
        FilterCriterion::All,
        FilterCriterion::Finished,
        FilterCriterion::Unfinished,
        FilterCriterion::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCriterion::All => "all",
            FilterCriterion::Finished => "finished",
            FilterCriterion::Unfinished => "unfinished",
            FilterCriterion::Favorites => "favorites",
        }
    }

    /// The predicate this criterion stands for.
    pub fn matches(&self, item: &Audiobook) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Finished => item.is_finished(),
            FilterCriterion::Unfinished => !item.is_finished(),
            FilterCriterion::Favorites => item.favorite,
        }
    }
}

impl FromStr for FilterCriterion {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| PipelineError::UnknownCriterion(s.to_string()))
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sort Field
// =============================================================================

/// The key the visible list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    Title,
    Author,
    Released,
    Added,
    Duration,
    LastPlayed,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Title,
        SortField::Author,
        SortField::Released,
        SortField::Added,
        SortField::Duration,
        SortField::LastPlayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Released => "released",
            SortField::Added => "added",
            SortField::Duration => "duration",
            SortField::LastPlayed => "last-played",
        }
    }

    /// Ascending comparison of two items on this key.
    ///
    /// Text keys compare case-insensitively. Missing optional values order
    /// before present ones.
    pub fn compare(&self, a: &Audiobook, b: &Audiobook) -> Ordering {
        match self {
            SortField::Title => caseless_cmp(a.sort_name(), b.sort_name()),
            SortField::Author => caseless_cmp(a.primary_author(), b.primary_author()),
            SortField::Released => a.released.cmp(&b.released),
            SortField::Added => a.added_at.cmp(&b.added_at),
            SortField::Duration => a.duration.total_cmp(&b.duration),
            SortField::LastPlayed => a.last_played_at.cmp(&b.last_played_at),
        }
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl FromStr for SortField {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PipelineError::UnknownSortField(s.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
