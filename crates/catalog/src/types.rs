//! Core domain types for an audiobook library.
//!
//! These mirror what the remote catalog hands back: playable items, authors,
//! and the labeled rows that make up a home feed. Nothing in this module
//! mutates or persists them; a fresh set is built for every fetch and thrown
//! away on the next refresh.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable, unique identifier of a catalog item
pub type ItemId = String;

/// Identifier of the library an item belongs to
pub type LibraryId = String;

// =============================================================================
// Library
// =============================================================================

/// A library as advertised by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,
}

// =============================================================================
// Audiobook
// =============================================================================

/// A playable catalog item.
///
/// Only `id` and `genres` matter to genre filtering. The remaining fields are
/// read by the criterion predicates and the sort keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audiobook {
    pub id: ItemId,
    pub library_id: LibraryId,
    pub title: String,
    /// Title used for ordering ("Hobbit, The"). Falls back to `title`.
    #[serde(default)]
    pub sort_title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Genre labels in the order the server lists them.
    ///
    /// Kept as a `Vec` rather than a set: the genre filter counts entries.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Total duration in seconds
    #[serde(default)]
    pub duration: f64,
    /// Release date as the server formats it (usually a year)
    #[serde(default)]
    pub released: Option<String>,
    /// Unix timestamp when the item was added to the library
    #[serde(default)]
    pub added_at: i64,
    /// Listening progress in `0.0..=1.0`, absent when never started
    #[serde(default)]
    pub progress: Option<f32>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub last_played_at: Option<i64>,
}

impl Audiobook {
    /// Create an item with only the identifying fields set.
    pub fn new(
        id: impl Into<ItemId>,
        library_id: impl Into<LibraryId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            library_id: library_id.into(),
            title: title.into(),
            sort_title: None,
            authors: Vec::new(),
            genres: Vec::new(),
            duration: 0.0,
            released: None,
            added_at: 0,
            progress: None,
            favorite: false,
            last_played_at: None,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_released(mut self, released: impl Into<String>) -> Self {
        self.released = Some(released.into());
        self
    }

    pub fn with_added_at(mut self, added_at: i64) -> Self {
        self.added_at = added_at;
        self
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_last_played_at(mut self, timestamp: i64) -> Self {
        self.last_played_at = Some(timestamp);
        self
    }

    /// The title used for ordering
    pub fn sort_name(&self) -> &str {
        self.sort_title.as_deref().unwrap_or(&self.title)
    }

    /// The first listed author, or an empty string
    pub fn primary_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }

    /// Whether listening progress has reached the end
    pub fn is_finished(&self) -> bool {
        self.progress.is_some_and(|p| p >= 1.0)
    }
}

// =============================================================================
// Author
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub book_count: u32,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            book_count: 0,
        }
    }
}

// =============================================================================
// Home Feed
// =============================================================================

/// An identified, labeled row of entities on the home screen.
///
/// Row ids such as `"continue-listening"` or `"discover"` are unique within a
/// single home response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeRow<T> {
    pub id: String,
    pub label: String,
    pub entities: Vec<T>,
}

impl<T> HomeRow<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, entities: Vec<T>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            entities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }
}

/// The raw home feed as the server returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    #[serde(default)]
    pub audiobook_rows: Vec<HomeRow<Audiobook>>,
    #[serde(default)]
    pub author_rows: Vec<HomeRow<Author>>,
}
