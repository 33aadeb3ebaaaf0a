//! The user's library and home-screen preferences.
//!
//! Read-only snapshot handed to the engine on every call. Loaded from a JSON
//! file; absent keys take their defaults.

use crate::criterion::{FilterCriterion, SortField};
use crate::error::PipelineError;
use crate::home::HomeConfig;
use anyhow::{Context, Result};
use catalog::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How the library list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "grid",
            DisplayMode::List => "list",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(DisplayMode::Grid),
            "list" => Ok(DisplayMode::List),
            _ => Err(PipelineError::UnknownDisplayMode(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every preference the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub display_mode: DisplayMode,
    pub filter: FilterCriterion,
    pub sort_field: SortField,
    pub ascending: bool,
    /// Genres picked in the genre filter. Empty means no restriction.
    pub selected_genres: HashSet<String>,
    pub show_authors_row: bool,
    pub disable_discover_row: bool,
    pub hidden_continue_listening_ids: HashSet<ItemId>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Grid,
            filter: FilterCriterion::All,
            sort_field: SortField::Title,
            ascending: true,
            selected_genres: HashSet::new(),
            show_authors_row: false,
            disable_discover_row: false,
            hidden_continue_listening_ids: HashSet::new(),
        }
    }
}

impl Preferences {
    /// Load preferences from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid preferences in {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The subset consulted when composing the home feed.
    pub fn home_config(&self) -> HomeConfig {
        HomeConfig {
            show_authors_row: self.show_authors_row,
            disable_discover_row: self.disable_discover_row,
            hidden_continue_listening_ids: self.hidden_continue_listening_ids.clone(),
        }
    }
}
