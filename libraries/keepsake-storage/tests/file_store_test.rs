//! Integration tests for the JSON file store
//!
//! These use REAL files in a temp directory so reloads cross the disk.

use chrono::NaiveDate;
use keepsake_core::{AssetResolver, ContentKind, KeyValueStore, Library, PhotoDraft};
use keepsake_storage::FileStore;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

/// Temp directory wrapper that cleans up on drop
struct TestDir {
    dir: TempDir,
}

impl TestDir {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn store(&self) -> FileStore {
        FileStore::new(self.dir.path().join("keepsake.json"))
    }
}

fn photo_draft(caption: &str) -> PhotoDraft {
    PhotoDraft {
        image_url: "data:image/jpeg;base64,AAAA".to_string(),
        caption: caption.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
    }
}

#[test]
fn library_survives_process_restart() {
    let dir = TestDir::new();

    {
        let mut library = Library::open(Rc::new(dir.store()), &AssetResolver::default());
        library.add_photo(photo_draft("San Valentín"));
    }

    let mut library = Library::open(Rc::new(dir.store()), &AssetResolver::default());
    let photos = library.load(ContentKind::Photos);

    assert_eq!(photos.len(), 6);
    assert_eq!(photos[5].id().get(), 6);
    assert_eq!(photos[5].headline(), "San Valentín");
}

#[test]
fn writes_keep_other_keys() {
    let dir = TestDir::new();
    let store = dir.store();

    store.set("customSongs", "[]").unwrap();
    store.set("customPoems", "[1]").unwrap();
    store.set("customSongs", "[2]").unwrap();

    assert_eq!(store.get("customSongs").unwrap().as_deref(), Some("[2]"));
    assert_eq!(store.get("customPoems").unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.keys().unwrap(), vec!["customPoems", "customSongs"]);
}

#[test]
fn corrupt_file_degrades_to_built_ins() {
    let dir = TestDir::new();
    let store = dir.store();
    fs::write(store.path(), "{ this is not json").unwrap();

    let mut library = Library::open(Rc::new(store), &AssetResolver::default());

    assert_eq!(library.load(ContentKind::Songs).len(), 3);
}

#[test]
fn corrupt_file_is_replaced_on_next_write() {
    let dir = TestDir::new();
    let store = dir.store();
    fs::write(store.path(), "garbage").unwrap();

    store.set("customPhotos", "[]").unwrap();

    assert_eq!(store.get("customPhotos").unwrap().as_deref(), Some("[]"));
}
