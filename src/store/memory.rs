//! In-memory store holding serialized payloads

use super::traits::{FormStore, StoreError};
use crate::state::FormValues;
use std::collections::HashMap;

/// Volatile store; payloads are kept as JSON strings so loads go through the
/// same parsing as the file store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Put an arbitrary payload under `key`
    pub fn insert_raw(&mut self, key: &str, payload: impl Into<String>) {
        self.entries.insert(key.to_string(), payload.into());
    }
}

impl FormStore for MemoryStore {
    fn save(&mut self, key: &str, values: &FormValues) -> Result<(), StoreError> {
        let payload = serde_json::to_string(values)?;
        self.entries.insert(key.to_string(), payload);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<FormValues>, StoreError> {
        match self.entries.get(key) {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.load("userDetailsForm").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut values = FormValues::default();
        values.set(Field::Name, "Asha");
        values.set(Field::Phone, "98765");

        store.save("k", &values).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(values));
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        let mut values = FormValues::default();
        values.set(Field::City, "Pune");
        store.save("k", &values).unwrap();
        values.set(Field::City, "Delhi");
        store.save("k", &values).unwrap();
        assert_eq!(store.load("k").unwrap().unwrap().city, "Delhi");
    }

    #[test]
    fn test_clear_removes_entry() {
        let mut store = MemoryStore::new();
        store.save("k", &FormValues::default()).unwrap();
        store.clear("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
        assert!(store.raw("k").is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.save("a", &FormValues::default()).unwrap();
        assert!(store.load("b").unwrap().is_none());
    }

    #[test]
    fn test_unparseable_payload_is_corrupt() {
        let mut store = MemoryStore::new();
        store.insert_raw("k", "not json");
        assert!(matches!(store.load("k"), Err(StoreError::Corrupt(_))));
    }
}
