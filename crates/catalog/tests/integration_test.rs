//! Loads the bundled sample library end to end.

use catalog::LibrarySnapshot;
use std::path::PathBuf;

fn sample_library_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample-library")
}

#[test]
fn test_load_sample_library() {
    let snapshot = LibrarySnapshot::load_from_dir(&sample_library_dir()).unwrap();

    assert_eq!(snapshot.library.id, "lib-books");
    assert_eq!(snapshot.items.len(), 4);
    assert_eq!(snapshot.home.audiobook_rows.len(), 4);
    assert_eq!(snapshot.home.author_rows.len(), 1);

    // The offline store spans libraries, so downloads are not pre-filtered
    assert_eq!(snapshot.downloads.len(), 2);
}

#[test]
fn test_sample_rows_keep_server_order() {
    let snapshot = LibrarySnapshot::load_from_dir(&sample_library_dir()).unwrap();

    let ids: Vec<&str> = snapshot
        .home
        .audiobook_rows
        .iter()
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["continue-listening", "recently-added", "discover", "listen-again"]
    );
}
