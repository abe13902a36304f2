//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`, with an in-memory fallback
//! for pages where storage is blocked.

use log::warn;
use todos_core::{DomainError, DomainResult, KeyValueStore, MemoryStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum BrowserStore {
    /// `window.localStorage`, looked up on every call
    Local,
    /// Lost on reload
    Memory(MemoryStore),
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", err))
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
}

impl BrowserStore {
    /// Use localStorage when the page can reach it
    pub fn detect() -> Self {
        match local_storage() {
            Ok(_) => BrowserStore::Local,
            Err(e) => {
                warn!("[STORAGE] {}; todos will not survive a reload", e);
                BrowserStore::memory()
            }
        }
    }

    pub fn memory() -> Self {
        BrowserStore::Memory(MemoryStore::new())
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            BrowserStore::Local => local_storage()?.get_item(key).map_err(js_error),
            BrowserStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            BrowserStore::Local => local_storage()?.set_item(key, value).map_err(js_error),
            BrowserStore::Memory(store) => store.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        match self {
            BrowserStore::Local => local_storage()?.remove_item(key).map_err(js_error),
            BrowserStore::Memory(store) => store.remove_item(key),
        }
    }
}
