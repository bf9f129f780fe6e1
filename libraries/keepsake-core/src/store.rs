//! Content store
//!
//! One store per content kind. The effective set is the built-in items
//! followed by the user-added items, in that order, recomputed on every read.
//! Only the user-added items are ever written to the persistence port.

use crate::error::{KeepsakeError, Result};
use crate::storage::KeyValueStore;
use crate::types::{ContentKind, ItemId, Photo, PhotoDraft, Poem, PoemDraft, Song, SongDraft};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;
use tracing::{debug, warn};

/// An item type a [`ContentStore`] can hold
pub trait ContentItem: Clone + Serialize + DeserializeOwned {
    /// Add-form submission, everything but the id
    type Draft;

    /// The kind this item belongs to (selects the storage key)
    const KIND: ContentKind;

    fn id(&self) -> ItemId;

    fn from_draft(id: ItemId, draft: Self::Draft) -> Self;
}

impl ContentItem for Song {
    type Draft = SongDraft;
    const KIND: ContentKind = ContentKind::Songs;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(id: ItemId, draft: SongDraft) -> Self {
        Song::from_draft(id, draft)
    }
}

impl ContentItem for Poem {
    type Draft = PoemDraft;
    const KIND: ContentKind = ContentKind::Poems;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(id: ItemId, draft: PoemDraft) -> Self {
        Poem::from_draft(id, draft)
    }
}

impl ContentItem for Photo {
    type Draft = PhotoDraft;
    const KIND: ContentKind = ContentKind::Photos;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_draft(id: ItemId, draft: PhotoDraft) -> Self {
        Photo::from_draft(id, draft)
    }
}

/// Built-in items merged with user-added items persisted under one key
pub struct ContentStore<I: ContentItem> {
    built_ins: Vec<I>,
    custom: Vec<I>,
    /// The persisted array exactly as read, plus items added since. Skipped
    /// elements stay in here so a write never drops them. `None` when the
    /// stored value could not be read as an array.
    stored: Option<Vec<Value>>,
    /// Ids carried by skipped elements; never handed out again
    reserved: BTreeSet<ItemId>,
    storage: Rc<dyn KeyValueStore>,
}

impl<I: ContentItem> ContentStore<I> {
    /// Create a store and load its user-added items
    pub fn open(built_ins: Vec<I>, storage: Rc<dyn KeyValueStore>) -> Self {
        debug_assert!(
            has_unique_ids(&built_ins),
            "built-in {} must have unique ids",
            I::KIND
        );

        let mut store = Self {
            built_ins,
            custom: Vec::new(),
            stored: Some(Vec::new()),
            reserved: BTreeSet::new(),
            storage,
        };
        store.reload();
        store
    }

    /// Re-read the user-added items from storage and return the effective set
    ///
    /// Absent or malformed data is treated as an empty list.
    pub fn load(&mut self) -> Vec<I> {
        self.reload();
        self.items()
    }

    /// The effective set: built-ins followed by user-added items
    pub fn items(&self) -> Vec<I> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.built_ins.iter().chain(self.custom.iter())
    }

    pub fn built_ins(&self) -> &[I] {
        &self.built_ins
    }

    pub fn custom_items(&self) -> &[I] {
        &self.custom
    }

    pub fn get(&self, id: ItemId) -> Option<&I> {
        self.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.built_ins.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an add would be written back to storage
    pub fn is_writable(&self) -> bool {
        self.stored.is_some()
    }

    /// Id the next added item will receive: max id + 1, or 1 when empty
    ///
    /// Ids of skipped persisted elements count as taken. Past `u32::MAX` the
    /// smallest free id is used instead.
    pub fn next_id(&self) -> ItemId {
        let Some(max) = self.taken_ids().max() else {
            return ItemId::FIRST;
        };
        max.next().unwrap_or_else(|| {
            let id = self.first_free_id();
            warn!(kind = %I::KIND, id = %id, "Ids exhausted above maximum, using first free id");
            id
        })
    }

    /// Append a new item and write the full user-added list back
    ///
    /// The write is best-effort: on failure the item stays in memory for the
    /// rest of the session and the failure is only logged.
    pub fn add(&mut self, draft: I::Draft) -> I {
        let item = I::from_draft(self.next_id(), draft);
        self.custom.push(item.clone());

        if let Err(e) = self.persist(&item) {
            warn!(
                kind = %I::KIND,
                id = %item.id(),
                error = %e,
                "Failed to persist custom items"
            );
        } else {
            debug!(kind = %I::KIND, id = %item.id(), "Added custom item");
        }

        item
    }

    fn taken_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.iter()
            .map(ContentItem::id)
            .chain(self.reserved.iter().copied())
    }

    fn first_free_id(&self) -> ItemId {
        let taken: HashSet<ItemId> = self.taken_ids().collect();
        let mut id = ItemId::FIRST;
        // Only falls through with every u32 taken
        while taken.contains(&id) {
            match id.next() {
                Some(next) => id = next,
                None => break,
            }
        }
        id
    }

    fn persist(&mut self, item: &I) -> Result<()> {
        let key = I::KIND.storage_key();
        let Some(stored) = self.stored.as_mut() else {
            return Err(KeepsakeError::storage(format!(
                "refusing to overwrite unreadable {key}"
            )));
        };

        stored.push(serde_json::to_value(item)?);
        let json = serde_json::to_string(stored)?;
        self.storage.set(key, &json)
    }

    fn reload(&mut self) {
        let loaded = self.read_custom();
        self.custom = loaded.items;
        self.stored = loaded.stored;
        self.reserved = loaded.reserved;
    }

    fn read_custom(&self) -> Loaded<I> {
        let key = I::KIND.storage_key();

        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Loaded::empty(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read custom items");
                return Loaded::unreadable();
            }
        };

        let values = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(values)) => values,
            Ok(other) => {
                warn!(key = %key, found = json_type(&other), "Ignoring custom items that are not a list");
                return Loaded::unreadable();
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring malformed custom items");
                return Loaded::unreadable();
            }
        };

        let mut seen: HashSet<ItemId> = self.built_ins.iter().map(ContentItem::id).collect();
        let mut items = Vec::with_capacity(values.len());
        let mut reserved = BTreeSet::new();

        for (index, value) in values.iter().enumerate() {
            match I::deserialize(value) {
                Ok(item) if seen.insert(item.id()) => items.push(item),
                Ok(item) => {
                    warn!(key = %key, index, id = %item.id(), "Skipping custom item with duplicate id");
                }
                Err(e) => {
                    warn!(key = %key, index, error = %e, "Skipping undecodable custom item");
                    if let Some(id) = raw_id(value) {
                        reserved.insert(id);
                    }
                }
            }
        }

        debug!(key = %key, count = items.len(), skipped = values.len() - items.len(), "Loaded custom items");
        Loaded {
            items,
            stored: Some(values),
            reserved,
        }
    }
}

/// Result of reading one storage key
struct Loaded<I> {
    items: Vec<I>,
    stored: Option<Vec<Value>>,
    reserved: BTreeSet<ItemId>,
}

impl<I> Loaded<I> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            stored: Some(Vec::new()),
            reserved: BTreeSet::new(),
        }
    }

    fn unreadable() -> Self {
        Self {
            items: Vec::new(),
            stored: None,
            reserved: BTreeSet::new(),
        }
    }
}

/// The id of an element that failed to decode, when it still has a usable one
fn raw_id(value: &Value) -> Option<ItemId> {
    let id = value.get("id")?.as_u64()?;
    ItemId::new(u32::try_from(id).ok()?)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn has_unique_ids<I: ContentItem>(items: &[I]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|item| seen.insert(item.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    }

    fn photo(id: u32) -> Photo {
        Photo {
            id: ItemId::new(id).unwrap(),
            image_url: format!("/assets/{id}.jpeg"),
            caption: format!("photo {id}"),
            date: date(),
        }
    }

    fn draft(caption: &str) -> PhotoDraft {
        PhotoDraft {
            image_url: "data:image/png;base64,AAAA".to_string(),
            caption: caption.to_string(),
            date: date(),
        }
    }

    #[test]
    fn empty_store_assigns_first_id() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = ContentStore::<Photo>::open(Vec::new(), storage);

        assert!(store.is_empty());
        let added = store.add(draft("first"));
        assert_eq!(added.id, ItemId::FIRST);
    }

    #[test]
    fn next_id_follows_maximum_not_count() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = ContentStore::open(vec![photo(1), photo(7)], storage);

        assert_eq!(store.next_id().get(), 8);
        assert_eq!(store.add(draft("x")).id.get(), 8);
        assert_eq!(store.next_id().get(), 9);
    }

    #[test]
    fn add_writes_full_custom_list() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = ContentStore::open(vec![photo(1)], storage.clone());

        store.add(draft("a"));
        store.add(draft("b"));

        let raw = storage.raw("customPhotos").unwrap();
        let persisted: Vec<Photo> = serde_json::from_str(&raw).unwrap();
        let captions: Vec<_> = persisted.iter().map(|p| p.caption.as_str()).collect();
        assert_eq!(captions, vec!["a", "b"]);
    }

    #[test]
    fn failed_write_keeps_item_in_memory() {
        let storage = Rc::new(MemoryStore::new());
        storage.reject_writes(true);
        let mut store = ContentStore::open(vec![photo(1)], storage.clone());

        let added = store.add(draft("kept"));

        assert_eq!(store.get(added.id).map(|p| p.caption.as_str()), Some("kept"));
        assert!(storage.raw("customPhotos").is_none());
    }

    #[test]
    fn duplicate_persisted_ids_are_skipped() {
        let raw = serde_json::to_string(&vec![photo(1), photo(2), photo(2)]).unwrap();
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", raw));
        let store = ContentStore::open(vec![photo(1)], storage);

        let ids: Vec<u32> = store.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn undecodable_elements_are_skipped() {
        let raw = r#"[
            {"id": 2, "imageUrl": "a.jpeg", "caption": "ok", "date": "2024-02-14"},
            {"id": 0, "imageUrl": "b.jpeg", "caption": "zero", "date": "2024-02-14"},
            {"id": 3, "caption": "missing url", "date": "2024-02-14"},
            {"id": 4, "imageUrl": "d.jpeg", "caption": "ok too", "date": "2024-02-14"}
        ]"#;
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", raw));
        let store = ContentStore::<Photo>::open(Vec::new(), storage);

        let ids: Vec<u32> = store.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn add_never_reuses_the_largest_id() {
        let raw = r#"[{"id": 4294967295, "imageUrl": "a.jpeg", "caption": "last", "date": "2024-02-14"}]"#;
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", raw));
        let mut store = ContentStore::<Photo>::open(vec![photo(1), photo(2)], storage);

        let added = store.add(draft("after the last"));

        assert_eq!(added.id.get(), 3);
        let ids: HashSet<ItemId> = store.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn skipped_elements_survive_an_add() {
        let raw = r#"[
            {"id": 1, "imageUrl": "legacy.jpeg", "caption": "legacy", "date": "14/02/2026"},
            {"id": 2, "imageUrl": "b.jpeg", "caption": "ok", "date": "2026-02-14"}
        ]"#;
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", raw));
        let mut store = ContentStore::<Photo>::open(Vec::new(), storage.clone());

        let added = store.add(draft("new"));

        let persisted: Vec<Value> = serde_json::from_str(&storage.raw("customPhotos").unwrap()).unwrap();
        let captions: Vec<&str> = persisted
            .iter()
            .filter_map(|value| value["caption"].as_str())
            .collect();
        assert_eq!(captions, vec!["legacy", "ok", "new"]);
        assert_eq!(persisted[0]["date"], "14/02/2026");
        assert_eq!(added.id.get(), 3);
    }

    #[test]
    fn skipped_element_ids_are_not_handed_out() {
        let raw = r#"[{"id": 9, "caption": "missing url", "date": "2024-02-14"}]"#;
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", raw));
        let store = ContentStore::<Photo>::open(vec![photo(1)], storage);

        assert_eq!(store.next_id().get(), 10);
    }

    #[test]
    fn unreadable_value_is_not_overwritten() {
        let storage = Rc::new(MemoryStore::with_entry("customPhotos", "{\"legacy\": true}"));
        let mut store = ContentStore::<Photo>::open(vec![photo(1)], storage.clone());
        assert!(!store.is_writable());

        let added = store.add(draft("kept in memory"));

        assert_eq!(added.id.get(), 2);
        assert!(store.get(added.id).is_some());
        assert_eq!(storage.raw("customPhotos").as_deref(), Some("{\"legacy\": true}"));
    }
}
