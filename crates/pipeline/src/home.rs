//! Composition of the home feed.
//!
//! The server decides which rows exist and what they contain. This module
//! applies the per-row rules on top:
//! - "continue-listening" loses the items the user chose to hide
//! - "discover" disappears when disabled in preferences
//! - author rows are only shown when enabled
//! - empty rows are never shown
//! - downloaded items become a trailing "downloads" row

use crate::filters::ExcludedItemsFilter;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Audiobook, Author, HomeRow, ItemId};
use std::collections::HashSet;
use tracing::debug;

pub const CONTINUE_LISTENING_ROW: &str = "continue-listening";
pub const DISCOVER_ROW: &str = "discover";
pub const DOWNLOADS_ROW: &str = "downloads";

/// Label of the synthetic downloads row (a localization key).
pub const DOWNLOADS_LABEL: &str = "downloads";

/// Home-screen flags taken from the preferences snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeConfig {
    pub show_authors_row: bool,
    pub disable_discover_row: bool,
    pub hidden_continue_listening_ids: HashSet<ItemId>,
}

/// The rows to render, in render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub audiobook_rows: Vec<HomeRow<Audiobook>>,
    pub author_rows: Vec<HomeRow<Author>>,
    pub downloads: Option<HomeRow<Audiobook>>,
}

impl HomeFeed {
    /// True when there is nothing at all to show.
    pub fn is_empty(&self) -> bool {
        self.audiobook_rows.is_empty() && self.author_rows.is_empty() && self.downloads.is_none()
    }

    /// Row ids in the order a consumer renders them.
    pub fn row_ids(&self) -> Vec<&str> {
        self.audiobook_rows
            .iter()
            .map(|row| row.id.as_str())
            .chain(self.author_rows.iter().map(|row| row.id.as_str()))
            .chain(self.downloads.iter().map(|row| row.id.as_str()))
            .collect()
    }
}

/// Apply the home-screen rules to a raw home response.
///
/// ## Algorithm
/// 1. For each audiobook row, in server order:
///    a. "continue-listening": drop hidden items
///    b. "discover": drop the row when disabled
///    c. drop the row if it has no items left
/// 2. Keep non-empty author rows only when author rows are enabled
/// 3. Append a downloads row when there are downloaded items
pub fn compose_home_rows(
    audiobook_rows: Vec<HomeRow<Audiobook>>,
    author_rows: Vec<HomeRow<Author>>,
    downloaded_items: Vec<Audiobook>,
    config: &HomeConfig,
) -> Result<HomeFeed> {
    let hidden = ExcludedItemsFilter::new(config.hidden_continue_listening_ids.iter().cloned());

    let mut audiobooks = Vec::with_capacity(audiobook_rows.len());
    for mut row in audiobook_rows {
        match row.id.as_str() {
            CONTINUE_LISTENING_ROW => {
                row.entities = hidden.apply(row.entities)?;
            }
            DISCOVER_ROW if config.disable_discover_row => {
                debug!("Discover row disabled, dropping {} items", row.len());
                continue;
            }
            _ => {}
        }

        if row.is_empty() {
            debug!("Dropping empty row: {}", row.id);
            continue;
        }
        audiobooks.push(row);
    }

    let authors: Vec<HomeRow<Author>> = if config.show_authors_row {
        author_rows.into_iter().filter(|row| !row.is_empty()).collect()
    } else {
        Vec::new()
    };

    let downloads = (!downloaded_items.is_empty())
        .then(|| HomeRow::new(DOWNLOADS_ROW, DOWNLOADS_LABEL, downloaded_items));

    Ok(HomeFeed {
        audiobook_rows: audiobooks,
        author_rows: authors,
        downloads,
    })
}
