//! Todo Repository
//!
//! The whole list is stored as one JSON array under a single key.

use super::traits::KeyValueStore;
use crate::domain::TodoItem;
use crate::error::PagesResult;

#[derive(Debug, Clone)]
pub struct TodoRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored list, empty when nothing was saved yet
    pub fn load(&self) -> PagesResult<Vec<TodoItem>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the stored list
    pub fn save(&self, todos: &[TodoItem]) -> PagesResult<()> {
        let raw = serde_json::to_string(todos)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagesError;
    use crate::store::MemoryStore;

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let repo = TodoRepository::new(store.clone(), "todos");
        let todos = vec![TodoItem::new(1, "a".into()), TodoItem::new(2, "b".into())];

        repo.save(&todos).unwrap();
        assert_eq!(repo.load().unwrap(), todos);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let repo = TodoRepository::new(MemoryStore::new(), "todos");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_is_an_error() {
        let store = MemoryStore::new();
        store.set("todos", "not json").unwrap();
        let repo = TodoRepository::new(store, "todos");

        assert!(matches!(repo.load(), Err(PagesError::Serialization(_))));
    }
}
