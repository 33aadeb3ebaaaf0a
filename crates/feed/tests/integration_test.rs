//! Integration tests for the refresh controllers.
//!
//! Time is paused in these tests, so the sleeps inside the mocks decide the
//! order in which fetches complete without slowing the suite down.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use catalog::{Audiobook, Author, HomeResponse, HomeRow};
use feed::{HomeController, LibraryController, Phase};
use pipeline::{FilterCriterion, Preferences, SortField};
use sources::{
    CatalogClient, FetchError, FetchResult, OfflineStore, PlaybackEvent, SnapshotSource,
    playback_channel,
};

const LIBRARY: &str = "lib-books";

// ============================================================================
// Mock Sources
// ============================================================================

/// Catalog client with a fixed response, delay, and failure switch
struct MockCatalog {
    home: HomeResponse,
    items: Vec<Audiobook>,
    delay: Duration,
    fail: bool,
    home_calls: AtomicUsize,
}

impl MockCatalog {
    fn new(delay_ms: u64) -> Self {
        Self {
            home: create_test_home(),
            items: vec![
                Audiobook::new("b", LIBRARY, "Bravo").with_genres(["Fantasy"]),
                Audiobook::new("a", LIBRARY, "Alpha").with_genres(["Fantasy", "Horror"]),
            ],
            delay: Duration::from_millis(delay_ms),
            fail: false,
            home_calls: AtomicUsize::new(0),
        }
    }

    fn failing(delay_ms: u64) -> Self {
        Self {
            fail: true,
            ..Self::new(delay_ms)
        }
    }

    fn home_calls(&self) -> usize {
        self.home_calls.load(Ordering::SeqCst)
    }
}

impl CatalogClient for MockCatalog {
    async fn get_items(&self, _library_id: &str) -> FetchResult<Vec<Audiobook>> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(FetchError::FetchFailed("server unreachable".to_string()));
        }
        Ok(self.items.clone())
    }

    async fn home(&self, _library_id: &str) -> FetchResult<HomeResponse> {
        self.home_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(FetchError::FetchFailed("server unreachable".to_string()));
        }
        Ok(self.home.clone())
    }
}

/// Offline store with a fixed response, delay, and failure switch
struct MockStore {
    downloads: Vec<Audiobook>,
    delay: Duration,
    fail: bool,
}

impl MockStore {
    fn new(delay_ms: u64) -> Self {
        Self {
            downloads: vec![
                Audiobook::new("dl", LIBRARY, "Downloaded"),
                Audiobook::new("ep", "lib-podcasts", "Episode"),
            ],
            delay: Duration::from_millis(delay_ms),
            fail: false,
        }
    }

    fn failing(delay_ms: u64) -> Self {
        Self {
            fail: true,
            ..Self::new(delay_ms)
        }
    }
}

impl OfflineStore for MockStore {
    async fn downloaded_audiobooks(&self) -> FetchResult<Vec<Audiobook>> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(FetchError::LocalFetchFailed("database locked".to_string()));
        }
        Ok(self.downloads.clone())
    }
}

fn create_test_home() -> HomeResponse {
    HomeResponse {
        audiobook_rows: vec![
            HomeRow::new(
                "continue-listening",
                "Continue Listening",
                vec![
                    Audiobook::new("a", LIBRARY, "Alpha"),
                    Audiobook::new("b", LIBRARY, "Bravo"),
                ],
            ),
            HomeRow::new("recent", "Recent", vec![]),
        ],
        author_rows: vec![HomeRow::new(
            "newest-authors",
            "Newest Authors",
            vec![Author::new("au", "Le Guin")],
        )],
    }
}

fn build_controller(
    catalog: MockCatalog,
    store: MockStore,
) -> (HomeController<MockCatalog, MockStore>, Arc<MockCatalog>) {
    let catalog = Arc::new(catalog);
    let controller = HomeController::new(LIBRARY, Arc::clone(&catalog), Arc::new(store));
    (controller, catalog)
}

async fn wait_until_settled(controller: &HomeController<MockCatalog, MockStore>) {
    let mut receiver = controller.subscribe();
    receiver
        .wait_for(|state| state.phase.is_settled())
        .await
        .expect("controller dropped");
}

// ============================================================================
// Completion Races
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_fast_local_slow_remote_converges() {
    let (controller, _) = build_controller(MockCatalog::new(50), MockStore::new(5));
    assert_eq!(controller.phase(), Phase::Idle);

    controller.refresh();

    // Local has landed, remote has not
    tokio::time::sleep(Duration::from_millis(10)).await;
    let partial = controller.state();
    assert_eq!(partial.phase, Phase::Loading);
    assert_eq!(partial.downloads.len(), 1);
    assert!(partial.home.audiobook_rows.is_empty());

    wait_until_settled(&controller).await;
    let state = controller.state();
    assert_eq!(state.phase, Phase::Loaded);
    assert_eq!(state.downloads.len(), 1);
    assert_eq!(state.home.audiobook_rows.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_slow_local_fast_remote_converges() {
    let (controller, _) = build_controller(MockCatalog::new(5), MockStore::new(50));

    controller.refresh();

    // Remote has landed, local has not
    tokio::time::sleep(Duration::from_millis(10)).await;
    let partial = controller.state();
    assert_eq!(partial.phase, Phase::Loading);
    assert!(partial.downloads.is_empty());
    assert_eq!(partial.home.audiobook_rows.len(), 2);

    wait_until_settled(&controller).await;
    let state = controller.state();
    assert_eq!(state.phase, Phase::Loaded);
    assert_eq!(state.downloads.len(), 1);
    assert_eq!(state.home.audiobook_rows.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_both_orders_compose_identically() {
    let config = Preferences {
        show_authors_row: true,
        ..Default::default()
    }
    .home_config();

    let (fast_local, _) = build_controller(MockCatalog::new(50), MockStore::new(5));
    fast_local.refresh().finished().await;

    let (fast_remote, _) = build_controller(MockCatalog::new(5), MockStore::new(50));
    fast_remote.refresh().finished().await;

    let a = fast_local.compose(&config).unwrap();
    let b = fast_remote.compose(&config).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.row_ids(),
        vec!["continue-listening", "newest-authors", "downloads"]
    );
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_remote_failure_enters_failed_without_retry() {
    let (controller, catalog) = build_controller(MockCatalog::failing(5), MockStore::new(5));

    controller.refresh().finished().await;
    assert_eq!(controller.phase(), Phase::Failed);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(catalog.home_calls(), 1, "no automatic retry");
    assert_eq!(controller.phase(), Phase::Failed);

    // Downloads still arrived
    assert_eq!(controller.state().downloads.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_local_failure_is_tolerated() {
    let (controller, _) = build_controller(MockCatalog::new(5), MockStore::failing(1));

    controller.refresh().finished().await;

    let state = controller.state();
    assert_eq!(state.phase, Phase::Loaded);
    assert!(state.downloads.is_empty());

    let feed = controller.compose(&Default::default()).unwrap();
    assert!(feed.downloads.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_downloads_restricted_to_library() {
    let (controller, _) = build_controller(MockCatalog::new(1), MockStore::new(1));

    controller.refresh().finished().await;

    let ids: Vec<_> = controller
        .state()
        .downloads
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(ids, vec!["dl"]);
}

// ============================================================================
// Event-driven Refresh
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_finished_event_triggers_refresh() {
    let (controller, catalog) = build_controller(MockCatalog::new(10), MockStore::new(10));
    let events = playback_channel(8);

    let listener = tokio::spawn(controller.clone().run(events.subscribe()));

    events
        .send(PlaybackEvent::ItemFinished {
            item_id: Some("a".to_string()),
        })
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(catalog.home_calls(), 1);
    assert_eq!(controller.phase(), Phase::Loaded);

    // Every further event refreshes again
    events
        .send(PlaybackEvent::ItemFinished { item_id: None })
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(catalog.home_calls(), 2);

    drop(events);
    listener.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_lagged_events_collapse_into_one_refresh() {
    let (controller, catalog) = build_controller(MockCatalog::new(10), MockStore::new(10));
    let events = playback_channel(1);
    let receiver = events.subscribe();

    for _ in 0..3 {
        events
            .send(PlaybackEvent::ItemFinished { item_id: None })
            .unwrap();
    }
    drop(events);

    // One refresh for the lag, one for the event still buffered
    controller.clone().run(receiver).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(catalog.home_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_refreshes_both_complete() {
    let (controller, catalog) = build_controller(MockCatalog::new(20), MockStore::new(20));

    let first = controller.refresh();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = controller.refresh();

    first.finished().await;
    second.finished().await;

    assert_eq!(catalog.home_calls(), 2);
    assert_eq!(controller.phase(), Phase::Loaded);
}

// ============================================================================
// Library Controller
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_library_refresh_and_visible_list() {
    let controller = LibraryController::new(LIBRARY, Arc::new(MockCatalog::new(5)));
    assert_eq!(controller.phase(), Phase::Idle);

    assert_eq!(controller.refresh().await, Phase::Loaded);
    assert_eq!(controller.genres(), vec!["Fantasy", "Horror"]);

    let preferences = Preferences {
        sort_field: SortField::Title,
        ..Default::default()
    };
    let visible: Vec<_> = controller
        .visible(&preferences)
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(visible, vec!["a", "b"]);

    let narrowed = controller
        .visible_with_genres(&preferences, HashSet::from(["Horror".to_string()]))
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].id, "a");
}

#[tokio::test(start_paused = true)]
async fn test_library_failure_keeps_previous_items() {
    let controller = LibraryController::new(LIBRARY, Arc::new(MockCatalog::failing(5)));

    assert_eq!(controller.refresh().await, Phase::Failed);
    assert!(controller.items().is_empty());

    let preferences = Preferences {
        filter: FilterCriterion::Favorites,
        ..Default::default()
    };
    assert!(controller.visible(&preferences).unwrap().is_empty());
}

// ============================================================================
// Sample Library
// ============================================================================

#[tokio::test]
async fn test_sample_library_home_end_to_end() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample-library");
    let source = Arc::new(SnapshotSource::load(&dir).unwrap());
    let preferences = Preferences::load(&dir.join("preferences.json")).unwrap();

    let controller = HomeController::new(LIBRARY, Arc::clone(&source), source);
    controller.refresh().finished().await;
    assert_eq!(controller.phase(), Phase::Loaded);

    let feed = controller.compose(&preferences.home_config()).unwrap();
    assert_eq!(
        feed.row_ids(),
        vec![
            "continue-listening",
            "recently-added",
            "discover",
            "newest-authors",
            "downloads"
        ]
    );

    // li_sapiens is hidden from continue-listening in the sample preferences
    let continue_listening: Vec<_> = feed.audiobook_rows[0]
        .entities
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(continue_listening, vec!["li_dune"]);

    // The podcast episode belongs to another library
    assert_eq!(feed.downloads.unwrap().entities.len(), 1);
}
