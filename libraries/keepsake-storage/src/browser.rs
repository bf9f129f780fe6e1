//! Browser local storage adapter (`wasm` feature)

use crate::error::{Result, StorageError};
use keepsake_core::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage` behind the persistence port
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// Attach to the current window's local storage
    pub fn local() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("local storage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> keepsake_core::Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)).into())
    }

    fn set(&self, key: &str, value: &str) -> keepsake_core::Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::write_rejected(key, describe(&e)).into())
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
