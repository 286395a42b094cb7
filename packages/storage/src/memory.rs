use std::collections::HashMap;

use crate::store::{SettingsStore, StorageResult};

/// Non-durable store backed by a `HashMap`.
///
/// The test implementation, and enough for a session-scoped store when
/// nothing should outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("currency"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("currency", "$").unwrap();
        assert_eq!(store.get("currency"), Some("$".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("currency", "$").unwrap();
        store.set("currency", "₿").unwrap();
        assert_eq!(store.get("currency"), Some("₿".to_string()));
    }
}
