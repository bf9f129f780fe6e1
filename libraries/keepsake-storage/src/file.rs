//! JSON file key-value store
//!
//! The native counterpart of browser local storage: one JSON object on disk,
//! one string entry per key. Every write rewrites the whole file through a
//! temporary sibling and a rename, so a crash never leaves a half-written file.

use crate::error::{Result, StorageError};
use keepsake_core::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value by key
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    /// Write a value by key, keeping every other entry
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::SerializationError(e)) => {
                warn!(path = %self.path.display(), error = %e, "Replacing unreadable storage file");
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;

        debug!(path = %self.path.display(), key = %key, bytes = value.len(), "Wrote storage entry");
        Ok(())
    }

    /// All keys currently stored
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_entries()?.into_keys().collect())
    }

    fn read_entries(&self) -> Result<Entries> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> keepsake_core::Result<Option<String>> {
        Ok(self.read(key)?)
    }

    fn set(&self, key: &str, value: &str) -> keepsake_core::Result<()> {
        Ok(self.write(key, value)?)
    }
}
