//! Keepsake Storage
//!
//! Adapters that put a real backing store behind
//! [`keepsake_core::KeyValueStore`]:
//!
//! - [`FileStore`]: a JSON file on disk (native builds, the CLI)
//! - `BrowserStore`: `window.localStorage` (enable the `wasm` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! use keepsake_core::{AssetResolver, Library};
//! use keepsake_storage::FileStore;
//! use std::rc::Rc;
//!
//! let storage = Rc::new(FileStore::new("./data/keepsake.json"));
//! let library = Library::open(storage, &AssetResolver::default());
//! println!("{} songs", library.songs().len());
//! ```

mod error;
mod file;

#[cfg(feature = "wasm")]
mod browser;

pub use error::{Result, StorageError};
pub use file::FileStore;

#[cfg(feature = "wasm")]
pub use browser::BrowserStore;
