//! # Home Feed Controller
//!
//! Keeps the home screen's state current:
//! 1. A refresh enters `Loading` and starts two fetches at once
//!    (remote home feed, local downloads)
//! 2. Each fetch writes its own result as soon as it arrives
//! 3. The phase becomes `Loaded` once the remote feed arrived and the
//!    local fetch settled, or `Failed` if the remote fetch failed
//! 4. A finished playback item triggers another refresh
//!
//! A refresh does not cancel one already in flight. Both run to completion
//! and the later write to each field wins.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use catalog::LibraryId;
use pipeline::filters::LibraryScopeFilter;
use pipeline::{Filter, HomeConfig, HomeFeed, compose_home_rows};
use sources::{CatalogClient, FetchError, OfflineStore, PlaybackEvent};

use crate::state::{FeedState, Phase};

/// Join handles of the two fetches started by one refresh.
///
/// Awaiting them is optional; state updates do not depend on it.
#[derive(Debug)]
pub struct RefreshHandles {
    pub remote: JoinHandle<()>,
    pub local: JoinHandle<()>,
}

impl RefreshHandles {
    /// Wait for both fetches, in either order.
    pub async fn finished(self) {
        let (remote, local) = tokio::join!(self.remote, self.local);
        if let Err(e) = remote {
            warn!("Home feed task ended abnormally: {}", e);
        }
        if let Err(e) = local {
            warn!("Downloads task ended abnormally: {}", e);
        }
    }
}

/// Drives the home screen of one library.
pub struct HomeController<C, S> {
    library_id: LibraryId,
    client: Arc<C>,
    store: Arc<S>,
    state: Arc<watch::Sender<FeedState>>,
}

impl<C, S> Clone for HomeController<C, S> {
    fn clone(&self) -> Self {
        Self {
            library_id: self.library_id.clone(),
            client: Arc::clone(&self.client),
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C, S> HomeController<C, S>
where
    C: CatalogClient,
    S: OfflineStore,
{
    pub fn new(library_id: impl Into<LibraryId>, client: Arc<C>, store: Arc<S>) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self {
            library_id: library_id.into(),
            client,
            store,
            state: Arc::new(state),
        }
    }

    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// Start a refresh. Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(library_id = %self.library_id))]
    pub fn refresh(&self) -> RefreshHandles {
        info!("Refreshing home feed");
        self.state.send_modify(FeedState::begin);

        let remote = {
            let client = Arc::clone(&self.client);
            let state = Arc::clone(&self.state);
            let library_id = self.library_id.clone();
            tokio::spawn(async move {
                let result = client.home(&library_id).await;
                match &result {
                    Ok(home) => debug!(
                        "Home feed arrived: {} audiobook rows, {} author rows",
                        home.audiobook_rows.len(),
                        home.author_rows.len()
                    ),
                    Err(e) => warn!("Home feed fetch failed: {}", e),
                }
                state.send_modify(|s| s.finish_remote(result));
            })
        };

        let local = {
            let store = Arc::clone(&self.store);
            let state = Arc::clone(&self.state);
            let scope = LibraryScopeFilter::new(self.library_id.clone());
            tokio::spawn(async move {
                let result = store.downloaded_audiobooks().await.and_then(|items| {
                    scope
                        .apply(items)
                        .map_err(|e| FetchError::LocalFetchFailed(e.to_string()))
                });
                match &result {
                    Ok(items) => debug!("Downloads arrived: {} items", items.len()),
                    Err(e) => warn!("Ignoring downloads fetch failure: {}", e),
                }
                state.send_modify(|s| s.finish_local(result));
            })
        };

        RefreshHandles { remote, local }
    }

    /// Compose the rows to render from the latest state.
    pub fn compose(&self, config: &HomeConfig) -> Result<HomeFeed> {
        let state = self.state();
        compose_home_rows(
            state.home.audiobook_rows,
            state.home.author_rows,
            state.downloads,
            config,
        )
    }

    /// Refresh every time playback of an item finishes.
    ///
    /// Returns when the event channel closes. If the receiver lagged behind,
    /// the missed events collapse into a single refresh.
    pub async fn run(self, mut events: broadcast::Receiver<PlaybackEvent>) {
        loop {
            match events.recv().await {
                Ok(PlaybackEvent::ItemFinished { item_id }) => {
                    info!("Playback finished ({:?}), refreshing", item_id);
                    self.refresh();
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("Missed {} playback events, refreshing once", missed);
                    self.refresh();
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Playback event channel closed");
                    break;
                }
            }
        }
    }
}
