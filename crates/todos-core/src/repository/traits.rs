//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::{DomainResult, Entity};

/// Snapshot repository for a collection of entities
///
/// Generic over any Entity type. Saving replaces everything stored, so a
/// failed save is repaired by the next successful one.
pub trait Repository<T: Entity> {
    /// List all entities
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace the stored entities with `entities`
    fn save_all(&self, entities: &[T]) -> DomainResult<()>;
}

/// String key-value storage with `localStorage` semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    fn remove_item(&self, key: &str) -> DomainResult<()>;
}
