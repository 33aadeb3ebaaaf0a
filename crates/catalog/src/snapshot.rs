//! Loading a library snapshot from disk.
//!
//! A snapshot directory holds the JSON the remote catalog and the offline
//! store would return for one library:
//! - library.json: `{ "id": ..., "name": ... }`
//! - items.json: every audiobook in the library
//! - home.json: the home feed rows
//! - downloads.json: locally downloaded items (optional)
//!
//! The files are independent, so they are parsed in parallel.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Everything known about one library at a point in time.
#[derive(Debug, Clone)]
pub struct LibrarySnapshot {
    pub library: Library,
    pub items: Vec<Audiobook>,
    pub home: HomeResponse,
    pub downloads: Vec<Audiobook>,
}

/// Read and decode a single JSON file.
fn parse_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
        file: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        reason: e.to_string(),
    })
}

/// Like `parse_json`, but a missing file yields the default value.
fn parse_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match parse_json(path) {
        Err(CatalogError::FileNotFound { path }) => {
            debug!("{} not present, using empty default", path);
            Ok(T::default())
        }
        other => other,
    }
}

impl LibrarySnapshot {
    /// Load a snapshot from a directory.
    ///
    /// Steps:
    /// 1. Parse the four files in parallel with `rayon::join`
    /// 2. Propagate the first parse error
    /// 3. Check that every item belongs to the snapshot's library
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        info!("Loading library snapshot from {:?}", dir);

        let library_path = dir.join("library.json");
        let items_path = dir.join("items.json");
        let home_path = dir.join("home.json");
        let downloads_path = dir.join("downloads.json");

        let ((library, items), (home, downloads)) = rayon::join(
            || {
                rayon::join(
                    || parse_json::<Library>(&library_path),
                    || parse_json::<Vec<Audiobook>>(&items_path),
                )
            },
            || {
                rayon::join(
                    || parse_json::<HomeResponse>(&home_path),
                    || parse_json_or_default::<Vec<Audiobook>>(&downloads_path),
                )
            },
        );

        let snapshot = Self {
            library: library?,
            items: items?,
            home: home?,
            downloads: downloads?,
        };
        snapshot.validate()?;

        info!(
            "Loaded library '{}': {} items, {} home rows, {} downloads",
            snapshot.library.name,
            snapshot.items.len(),
            snapshot.home.audiobook_rows.len() + snapshot.home.author_rows.len(),
            snapshot.downloads.len()
        );

        Ok(snapshot)
    }

    /// Items in `items.json` must all belong to this library.
    ///
    /// Downloads are exempt: the offline store spans every library.
    fn validate(&self) -> Result<()> {
        if let Some(stray) = self
            .items
            .iter()
            .find(|item| item.library_id != self.library.id)
        {
            return Err(CatalogError::ValidationError(format!(
                "item {} belongs to library {}, expected {}",
                stray.id, stray.library_id, self.library.id
            )));
        }
        Ok(())
    }
}
