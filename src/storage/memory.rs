//! In-memory store backend

use std::sync::Mutex;

use indexmap::IndexMap;

use super::KeyValueStore;
use crate::error::StoreError;

/// Insertion-ordered in-memory backend.
///
/// The default for tests and for embedding the engine without durable
/// storage. The mutex only satisfies `Send + Sync`; there is no concurrent
/// writer in the engine's execution model.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<IndexMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.shift_remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("equipment").unwrap(), None);

        store.set("equipment", "[]").unwrap();
        assert_eq!(store.get("equipment").unwrap().as_deref(), Some("[]"));

        store.remove("equipment").unwrap();
        assert_eq!(store.get("equipment").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("rentals", "a").unwrap();
        store.set("rentals", "b").unwrap();
        assert_eq!(store.get("rentals").unwrap().as_deref(), Some("b"));
    }
}
