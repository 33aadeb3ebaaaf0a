//! Observable state of the home and library screens.
//!
//! The home feed is filled by two fetches that finish in any order. Each
//! one writes only its own fields and then recomputes the phase, so there
//! is no point where one fetch waits for the other.

use catalog::{Audiobook, HomeResponse};
use sources::FetchResult;

/// Where a screen is in its refresh cycle.
///
/// `Loaded` and `Failed` stay put until the next refresh trigger; nothing
/// retries automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl Phase {
    /// True once a refresh has run to completion, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Loaded | Phase::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FetchStatus {
    #[default]
    Pending,
    Done,
    Failed,
}

/// Everything the home screen renders from.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub phase: Phase,
    /// Last home feed received from the server
    pub home: HomeResponse,
    /// Downloaded items of the shown library
    pub downloads: Vec<Audiobook>,
    pub(crate) remote: FetchStatus,
    pub(crate) local: FetchStatus,
}

impl FeedState {
    /// Enter `Loading` for a new refresh. Previous content stays visible.
    pub(crate) fn begin(&mut self) {
        self.remote = FetchStatus::Pending;
        self.local = FetchStatus::Pending;
        self.phase = Phase::Loading;
    }

    pub(crate) fn finish_remote(&mut self, result: FetchResult<HomeResponse>) {
        match result {
            Ok(home) => {
                self.home = home;
                self.remote = FetchStatus::Done;
            }
            Err(_) => self.remote = FetchStatus::Failed,
        }
        self.update_phase();
    }

    /// A failed local fetch empties the downloads and is otherwise ignored.
    pub(crate) fn finish_local(&mut self, result: FetchResult<Vec<Audiobook>>) {
        match result {
            Ok(downloads) => {
                self.downloads = downloads;
                self.local = FetchStatus::Done;
            }
            Err(_) => {
                self.downloads.clear();
                self.local = FetchStatus::Failed;
            }
        }
        self.update_phase();
    }

    fn update_phase(&mut self) {
        self.phase = match (self.remote, self.local) {
            (FetchStatus::Failed, _) => Phase::Failed,
            (FetchStatus::Done, FetchStatus::Done | FetchStatus::Failed) => Phase::Loaded,
            _ => Phase::Loading,
        };
    }
}

/// Everything the library screen renders from.
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub phase: Phase,
    pub items: Vec<Audiobook>,
}
