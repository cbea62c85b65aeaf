use super::traits::KeyValueStore;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// In-memory store used by tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes once the total stored size would exceed `quota_bytes`,
    /// mimicking a browser storage quota
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| io::Error::other("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> io::Result<()> {
        let mut items = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(io::Error::other(format!(
                    "quota of {} bytes exceeded",
                    quota
                )));
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> io::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("a").unwrap(), None);

        store.set_item("a", "[1]").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("[1]"));
        assert!(store.contains_key("a").unwrap());

        store.remove_item("a").unwrap();
        assert!(!store.contains_key("a").unwrap());
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(10);
        store.set_item("k", "1234").unwrap();
        assert!(store.set_item("other", "123456789").is_err());
        // Replacing an existing key only counts the new value
        store.set_item("k", "12345678").unwrap();
    }
}
