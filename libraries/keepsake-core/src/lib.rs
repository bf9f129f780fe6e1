//! Keepsake Core
//!
//! Content types, the persistence port, and the content stores behind the
//! songs, poems and album sections.
//!
//! # Architecture
//!
//! - **Domain Types**: `Song`, `Poem`, `Photo` and their add-form drafts
//! - **Persistence Port**: `KeyValueStore` (string values by key)
//! - **Content Stores**: built-in items merged with user-added items
//! - **Error Handling**: unified `KeepsakeError` and `Result` types
//!
//! Everything here is single-threaded: stores share the port through `Rc`.
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{AssetResolver, Library, MemoryStore, SongDraft};
//! use chrono::NaiveDate;
//! use std::rc::Rc;
//!
//! let storage = Rc::new(MemoryStore::new());
//! let mut library = Library::open(storage, &AssetResolver::default());
//!
//! let song = library.add_song(SongDraft {
//!     title: "Nuestra canción".to_string(),
//!     description: String::new(),
//!     audio_url: "/assets/4.mp3".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//! });
//!
//! // Three built-in songs come first
//! assert_eq!(song.id.get(), 4);
//! ```

#![forbid(unsafe_code)]

pub mod assets;
pub mod catalog;
pub mod dev_mode;
pub mod error;
pub mod library;
pub mod storage;
pub mod store;
pub mod types;

pub use assets::AssetResolver;
pub use dev_mode::DevMode;
pub use error::{KeepsakeError, Result};
pub use library::Library;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{ContentItem, ContentStore};
pub use types::{
    ContentKind, Download, Draft, Item, ItemId, Photo, PhotoDraft, Poem, PoemDraft, Song,
    SongDraft,
};
