//! Integration tests for the content stores
//!
//! Each test simulates a page session: open a library over a storage port,
//! mutate it, then reopen ("reload") over the same port.

use chrono::NaiveDate;
use keepsake_core::{
    AssetResolver, ContentKind, Draft, Item, ItemId, Library, MemoryStore, PoemDraft, SongDraft,
};
use std::rc::Rc;

// ===== Test Helpers =====

fn song_draft(title: &str) -> SongDraft {
    SongDraft {
        title: title.to_string(),
        description: "Para ti".to_string(),
        audio_url: "/assets/extra.mp3".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

fn ids(items: &[Item]) -> Vec<u32> {
    items.iter().map(|item| item.id().get()).collect()
}

fn open(storage: &Rc<MemoryStore>) -> Library {
    Library::open(storage.clone(), &AssetResolver::default())
}

// ===== Load =====

#[test]
fn load_without_persisted_data_returns_built_ins() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);

    assert_eq!(ids(&library.load(ContentKind::Songs)), vec![1, 2, 3]);
    assert_eq!(ids(&library.load(ContentKind::Poems)), vec![1]);
    assert_eq!(ids(&library.load(ContentKind::Photos)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn load_appends_persisted_items_in_stored_order() {
    let raw = r#"[
        {"id": 9, "title": "Nueve", "description": "", "audioUrl": "/a/9.mp3", "date": "2024-05-01"},
        {"id": 5, "title": "Cinco", "description": "", "audioUrl": "/a/5.mp3", "date": "2024-05-02"}
    ]"#;
    let storage = Rc::new(MemoryStore::with_entry("customSongs", raw));
    let mut library = open(&storage);

    let songs = library.load(ContentKind::Songs);
    assert_eq!(ids(&songs), vec![1, 2, 3, 9, 5]);
    assert_eq!(songs[3].headline(), "Nueve");
}

#[test]
fn malformed_persisted_data_yields_built_ins_only() {
    for raw in ["not json", "{\"id\": 4}", "42", "[1, 2"] {
        let storage = Rc::new(MemoryStore::with_entry("customPoems", raw));
        let mut library = open(&storage);

        assert_eq!(ids(&library.load(ContentKind::Poems)), vec![1], "input: {raw}");
    }
}

#[test]
fn poems_without_image_round_trip_without_field() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);

    library.add_poem(PoemDraft {
        title: "Sin imagen".to_string(),
        content: "una línea\notra línea".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        image_url: None,
    });

    let raw = storage.raw("customPoems").unwrap();
    assert!(!raw.contains("imageUrl"));
    assert!(raw.contains("\"date\":\"2025-01-01\""));

    let poems = open(&storage).poems().items();
    assert_eq!(poems[1].lines().count(), 2);
}

// ===== Add =====

#[test]
fn add_after_three_built_ins_assigns_four() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);

    let song = library.add_song(song_draft("Cuatro"));
    assert_eq!(song.id.get(), 4);
}

#[test]
fn added_item_survives_reload_exactly_once() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);
    let added = library.add(Draft::Song(song_draft("Nueva")));

    let mut reloaded = open(&storage);
    let songs = reloaded.load(ContentKind::Songs);

    assert_eq!(songs.iter().filter(|s| s.id() == added.id()).count(), 1);
    assert_eq!(songs.last(), Some(&added));
}

#[test]
fn ids_keep_increasing_across_sessions() {
    let storage = Rc::new(MemoryStore::new());

    open(&storage).add_song(song_draft("a"));
    open(&storage).add_song(song_draft("b"));
    let c = open(&storage).add_song(song_draft("c"));

    assert_eq!(c.id, ItemId::new(6).unwrap());
    assert_eq!(open(&storage).songs().custom_items().len(), 3);
}

#[test]
fn kinds_are_stored_under_separate_keys() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);

    library.add_song(song_draft("solo canciones"));

    assert!(storage.raw("customSongs").is_some());
    assert!(storage.raw("customPoems").is_none());
    assert!(storage.raw("customPhotos").is_none());
    assert_eq!(library.photos().len(), 5);
}

#[test]
fn built_ins_are_never_persisted() {
    let storage = Rc::new(MemoryStore::new());
    let mut library = open(&storage);
    library.add_song(song_draft("extra"));

    let raw = storage.raw("customSongs").unwrap();
    let persisted: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0]["id"], 4);
    assert_eq!(persisted[0]["audioUrl"], "/assets/extra.mp3");
}
