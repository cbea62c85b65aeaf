pub mod diagnostics;
pub mod file;
pub mod memory;
pub mod persisted;
pub mod traits;

pub use diagnostics::{CollectingSink, DiagnosticSink, StoreDiagnostic};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::{PersistedStore, Slot, StoredCollection};
pub use traits::KeyValueStore;
