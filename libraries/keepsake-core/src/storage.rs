//! Persistence port
//!
//! The content stores only ever read and write whole string values by key.
//! Browser local storage, a JSON file on disk, and the in-memory fake below
//! all fit behind [`KeyValueStore`].

use crate::error::{KeepsakeError, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// String-keyed persistence port
///
/// Methods take `&self`: implementations are single-threaded and use
/// interior mutability, the same way `window.localStorage` behaves.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Make every subsequent `set` fail, as a full quota would
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes.get() {
            return Err(KeepsakeError::storage(format!(
                "write rejected for key {key}"
            )));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
