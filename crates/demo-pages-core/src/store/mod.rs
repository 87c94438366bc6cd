//! Store Layer
//!
//! Durable key-value storage boundary and the repositories built on it.
//! Implementations: in-memory here, `localStorage` in the UI crate.

mod traits;
mod memory;
mod todo_repo;
mod theme_repo;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use todo_repo::TodoRepository;
pub use theme_repo::ThemeRepository;
