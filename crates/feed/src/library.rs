//! # Library Controller
//!
//! Loads every item of a library and derives the visible list from the
//! user's preferences. Unlike the home feed there is a single fetch, so a
//! refresh completes inline.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use catalog::{Audiobook, LibraryId};
use pipeline::{Preferences, available_genres, visible_items};
use sources::CatalogClient;

use crate::state::{LibraryState, Phase};

pub struct LibraryController<C> {
    library_id: LibraryId,
    client: Arc<C>,
    state: Arc<watch::Sender<LibraryState>>,
}

impl<C> Clone for LibraryController<C> {
    fn clone(&self) -> Self {
        Self {
            library_id: self.library_id.clone(),
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: CatalogClient> LibraryController<C> {
    pub fn new(library_id: impl Into<LibraryId>, client: Arc<C>) -> Self {
        let (state, _) = watch::channel(LibraryState::default());
        Self {
            library_id: library_id.into(),
            client,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LibraryState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// Fetch all items. On failure the previous items are kept.
    #[instrument(skip(self), fields(library_id = %self.library_id))]
    pub async fn refresh(&self) -> Phase {
        self.state.send_modify(|s| s.phase = Phase::Loading);

        match self.client.get_items(&self.library_id).await {
            Ok(items) => {
                info!("Loaded {} library items", items.len());
                self.state.send_modify(|s| {
                    s.items = items;
                    s.phase = Phase::Loaded;
                });
            }
            Err(e) => {
                warn!("Library fetch failed: {}", e);
                self.state.send_modify(|s| s.phase = Phase::Failed);
            }
        }

        self.phase()
    }

    /// Every loaded item, unfiltered.
    pub fn items(&self) -> Vec<Audiobook> {
        self.state.borrow().items.clone()
    }

    /// Genres offered by the genre picker.
    pub fn genres(&self) -> Vec<String> {
        available_genres(&self.state.borrow().items)
    }

    /// The list to render under `preferences`.
    pub fn visible(&self, preferences: &Preferences) -> Result<Vec<Audiobook>> {
        visible_items(self.items(), preferences)
    }

    /// Like `visible`, with a genre selection that is not persisted.
    pub fn visible_with_genres(
        &self,
        preferences: &Preferences,
        selected_genres: HashSet<String>,
    ) -> Result<Vec<Audiobook>> {
        let preferences = Preferences {
            selected_genres,
            ..preferences.clone()
        };
        self.visible(&preferences)
    }
}
