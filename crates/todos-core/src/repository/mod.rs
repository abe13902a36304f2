//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory;
mod todo_repo;
mod traits;


pub use memory::MemoryStore;
pub use todo_repo::TodoRepository;
pub use traits::{KeyValueStore, Repository};
