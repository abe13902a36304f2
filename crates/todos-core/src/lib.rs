//! Todos Core
//!
//! Layered architecture:
//! - domain: Item record, collection, sanitizer and editing state machine
//! - repository: Key-value storage seam and the item repository on top of it
//! - session: Collection + repository, persisting on every mutation

pub mod config;
pub mod domain;
pub mod repository;
pub mod session;

pub use config::TodoConfig;
pub use domain::{
    accepts_key, pluralize, sanitize, DomainError, DomainResult, EditCommit, EditField, EditState,
    Entity, Item, ListEvent, Stats, TodoList, DEFAULT_TITLE, MAX_WORD_LEN,
};
pub use repository::{KeyValueStore, MemoryStore, Repository, TodoRepository};
pub use session::TodoSession;
