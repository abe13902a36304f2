//! In-Memory Store
//!
//! `KeyValueStore` backed by a map. Used by tests and as a fallback when the
//! browser has no localStorage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

/// Shared in-memory key-value map. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, HashMap<String, String>>> {
        self.data
            .lock()
            .map_err(|e| DomainError::Storage(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
