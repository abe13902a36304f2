//! Domain Layer
//!
//! Contains the to-do entities and the rules that act on them.
//! Nothing in here touches storage or the DOM.

mod edit;
mod entity;
mod item;
mod sanitize;
mod todo_list;

#[cfg(test)]
mod proptests;

pub use edit::{EditCommit, EditField, EditState};
pub use entity::{DomainError, DomainResult, Entity};
pub use item::{Item, DEFAULT_TITLE};
pub use sanitize::{accepts_key, pluralize, sanitize, MAX_WORD_LEN};
pub use todo_list::{ListEvent, Stats, TodoList};
