use super::diagnostics::{DiagnosticSink, StoreDiagnostic};
use super::traits::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// One element of a stored collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Slot<T> {
    Parsed(T),
    /// An element that did not match the record type. It is written back
    /// unchanged whenever the collection is rewritten.
    Unparsed(Value),
}

impl<T> Slot<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Slot::Parsed(record) => Some(record),
            Slot::Unparsed(_) => None,
        }
    }

    pub fn parsed_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Parsed(record) => Some(record),
            Slot::Unparsed(_) => None,
        }
    }

    pub fn into_parsed(self) -> Option<T> {
        match self {
            Slot::Parsed(record) => Some(record),
            Slot::Unparsed(_) => None,
        }
    }
}

/// A collection loaded for read-modify-write
#[derive(Debug)]
pub struct StoredCollection<T> {
    pub slots: Vec<Slot<T>>,
    /// False when the stored value could not be read as a list at all.
    /// Such a collection must not be overwritten.
    pub intact: bool,
}

impl<T> StoredCollection<T> {
    fn empty() -> Self {
        Self {
            slots: Vec::new(),
            intact: true,
        }
    }

    fn unreadable() -> Self {
        Self {
            slots: Vec::new(),
            intact: false,
        }
    }
}

/// JSON collection storage on top of a [`KeyValueStore`].
///
/// Reads are lenient: an absent key, a backend error or unparsable JSON all
/// yield an empty collection, and a single malformed element only hides that
/// element. Writes are lossy: a failed write is dropped. Neither kind of
/// failure reaches the caller; each is logged and forwarded to the configured
/// [`DiagnosticSink`].
#[derive(Clone)]
pub struct PersistedStore {
    backend: Arc<dyn KeyValueStore>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl PersistedStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Load the records under `key`, skipping elements that do not parse
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_collection(key)
            .slots
            .into_iter()
            .filter_map(Slot::into_parsed)
            .collect()
    }

    /// Replace the collection under `key`
    pub fn write<T: Serialize>(&self, key: &str, collection: &[T]) {
        self.write_value(key, &collection);
    }

    /// Load every element under `key`, keeping the ones that fail to parse
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> StoredCollection<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return StoredCollection::empty(),
            Err(e) => {
                self.report(StoreDiagnostic::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                return StoredCollection::unreadable();
            }
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                self.report(StoreDiagnostic::ParseFailed {
                    key: key.to_string(),
                    reason: "stored value is not a list".to_string(),
                });
                return StoredCollection::unreadable();
            }
            Err(e) => {
                self.report(StoreDiagnostic::ParseFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                return StoredCollection::unreadable();
            }
        };

        let slots = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| self.parse_slot(key, index, item))
            .collect();
        StoredCollection {
            slots,
            intact: true,
        }
    }

    /// Replace the collection under `key`, unparsed elements included
    pub fn write_slots<T: Serialize>(&self, key: &str, slots: &[Slot<T>]) {
        self.write_value(key, slots);
    }

    fn parse_slot<T: DeserializeOwned>(
        &self,
        key: &str,
        index: usize,
        mut item: Value,
    ) -> Slot<T> {
        drop_nulls(&mut item);
        match T::deserialize(&item) {
            Ok(record) => Slot::Parsed(record),
            Err(e) => {
                self.report(StoreDiagnostic::ParseFailed {
                    key: key.to_string(),
                    reason: format!("element {}: {}", index, e),
                });
                Slot::Unparsed(item)
            }
        }
    }

    /// Initialise `key` with `default` unless something is already stored
    pub fn ensure_seeded<T: Serialize>(&self, key: &str, default: &[T]) {
        match self.backend.contains_key(key) {
            Ok(true) => {}
            Ok(false) => {
                debug!(key, records = default.len(), "Seeding collection");
                self.write(key, default);
            }
            Err(e) => self.report(StoreDiagnostic::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Load a single JSON value, `None` when absent or unreadable
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.report(StoreDiagnostic::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(StoreDiagnostic::ParseFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    /// Store a single JSON value
    pub fn write_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                self.report(StoreDiagnostic::SerializeFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        if let Err(e) = self.backend.set_item(key, &raw) {
            self.report(StoreDiagnostic::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            self.report(StoreDiagnostic::RemoveFailed {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }
    }

    fn report(&self, diagnostic: StoreDiagnostic) {
        warn!(
            event = diagnostic.event_name(),
            key = diagnostic.key(),
            reason = diagnostic.reason(),
            "Storage failure absorbed"
        );
        if let Some(sink) = &self.sink {
            sink.record(diagnostic);
        }
    }
}

/// Null members are treated as absent, so record defaults apply
fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(members) => {
            members.retain(|_, member| !member.is_null());
            members.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}
