//! In-memory Store
//!
//! Backs headless runs and tests. Clones share the same map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::KeyValueStore;
use crate::error::{PagesError, PagesResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> PagesError {
    PagesError::Storage("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PagesResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PagesResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> PagesResult<()> {
        self.entries.lock().map_err(|_| poisoned())?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();

        store.set("theme", "dark").unwrap();
        assert_eq!(view.get("theme").unwrap().as_deref(), Some("dark"));

        view.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
