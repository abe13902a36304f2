//! Todo Repository
//!
//! Keeps every item under one namespace key as a JSON object keyed by id.
//! Each save writes the whole list.

use std::collections::BTreeMap;

use log::warn;

use super::traits::{KeyValueStore, Repository};
use crate::domain::{DomainError, DomainResult, Entity, Item};

/// Item repository on top of a key-value store
#[derive(Debug, Clone)]
pub struct TodoRepository<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Load every item for startup.
    ///
    /// Unreadable data is logged and removed so later saves start from a clean slot.
    pub fn load(&self) -> DomainResult<Vec<Item>> {
        match self.list() {
            Err(DomainError::Serialization(e)) => {
                warn!("[REPO] Discarding unreadable data under '{}': {}", self.namespace, e);
                self.store.remove_item(&self.namespace)?;
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

impl<S: KeyValueStore> Repository<Item> for TodoRepository<S> {
    fn list(&self) -> DomainResult<Vec<Item>> {
        let Some(raw) = self.store.get_item(&self.namespace)? else {
            return Ok(Vec::new());
        };
        let stored: BTreeMap<u32, Item> = serde_json::from_str(&raw)?;
        let mut items: Vec<Item> = stored.into_values().collect();
        items.sort_by_key(|item| (item.order, item.id));
        Ok(items)
    }

    fn save_all(&self, entities: &[Item]) -> DomainResult<()> {
        let by_id: BTreeMap<u32, &Item> = entities.iter().map(|item| (item.id(), item)).collect();
        let raw = serde_json::to_string(&by_id)?;
        self.store.set_item(&self.namespace, &raw)
    }
}
