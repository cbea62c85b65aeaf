use std::io;

/// Raw string key-value storage, the moral equivalent of browser local storage.
///
/// Implementations only move strings; JSON handling and the lenient
/// failure policy live in [`super::PersistedStore`].
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> io::Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> io::Result<()>;

    /// Check whether `key` holds a value
    fn contains_key(&self, key: &str) -> io::Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}
