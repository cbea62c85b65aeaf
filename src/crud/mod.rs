pub mod filters;
pub mod ids;

pub use filters::{FilterKind, FilterSchema, Filters, Predicate};
pub use ids::generate_id;

use crate::error::{StoreError, StoreResult};
use crate::models::{Record, RecordMeta};
use crate::storage::{PersistedStore, Slot};
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Collection-generic create/read/update/delete over a [`PersistedStore`].
///
/// Each call rewrites the whole collection; the last write wins.
#[derive(Clone)]
pub struct CrudStore {
    store: PersistedStore,
    latency: Duration,
}

impl CrudStore {
    pub fn new(store: PersistedStore) -> Self {
        Self::with_latency(store, Duration::ZERO)
    }

    /// Delay every operation by `latency` to emulate a network round trip
    pub fn with_latency(store: PersistedStore, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn persisted(&self) -> &PersistedStore {
        &self.store
    }

    async fn simulate_network_delay(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }

    /// Current contents of the collection, without delay or filtering
    pub fn load<T: Record>(&self) -> Vec<T> {
        self.store.read(T::COLLECTION.storage_key())
    }

    /// Every stored element, ready to be modified and saved back
    fn load_for_write<T: Record>(&self) -> StoreResult<Vec<Slot<T>>> {
        let loaded = self
            .store
            .load_collection::<T>(T::COLLECTION.storage_key());
        if !loaded.intact {
            return Err(StoreError::Unreadable {
                collection: T::COLLECTION.storage_key(),
            });
        }
        Ok(loaded.slots)
    }

    fn save<T: Record>(&self, slots: &[Slot<T>]) {
        self.store.write_slots(T::COLLECTION.storage_key(), slots);
    }

    pub async fn list<T: Record>(&self, filters: &Filters) -> Vec<T> {
        self.simulate_network_delay().await;
        let records = filters.apply(self.load::<T>());
        debug!(
            collection = T::COLLECTION.storage_key(),
            count = records.len(),
            "Listed records"
        );
        records
    }

    pub async fn get_by_id<T: Record>(&self, id: &str) -> StoreResult<T> {
        self.simulate_network_delay().await;
        self.load::<T>()
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION.record_name(), id))
    }

    pub async fn create<T: Record>(&self, draft: T::Draft) -> StoreResult<T> {
        T::validate(&draft)?;
        self.simulate_network_delay().await;

        let mut slots = self.load_for_write::<T>()?;
        let record = T::from_draft(RecordMeta::new(generate_id(), Utc::now()), draft);
        slots.push(Slot::Parsed(record.clone()));
        self.save(&slots);

        debug!(
            collection = T::COLLECTION.storage_key(),
            id = record.id(),
            "Created record"
        );
        Ok(record)
    }

    pub async fn update<T: Record>(&self, id: &str, patch: T::Patch) -> StoreResult<T> {
        T::validate_patch(&patch)?;
        self.simulate_network_delay().await;

        let mut slots = self.load_for_write::<T>()?;
        let record = slots
            .iter_mut()
            .filter_map(Slot::parsed_mut)
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION.record_name(), id))?;

        record.apply(patch);
        record.meta_mut().updated_at = Utc::now();
        let updated = record.clone();
        self.save(&slots);

        debug!(collection = T::COLLECTION.storage_key(), id, "Updated record");
        Ok(updated)
    }

    pub async fn delete<T: Record>(&self, id: &str) -> StoreResult<()> {
        self.simulate_network_delay().await;

        let mut slots = self.load_for_write::<T>()?;
        let before = slots.len();
        slots.retain(|slot| slot.parsed().map_or(true, |record| record.id() != id));
        if slots.len() == before {
            return Err(StoreError::not_found(T::COLLECTION.record_name(), id));
        }
        self.save(&slots);

        debug!(collection = T::COLLECTION.storage_key(), id, "Deleted record");
        Ok(())
    }

    /// Empty the collection, whatever it currently holds
    pub async fn clear<T: Record>(&self) {
        self.simulate_network_delay().await;
        self.store.write::<T>(T::COLLECTION.storage_key(), &[]);
        debug!(collection = T::COLLECTION.storage_key(), "Cleared collection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Developer, Project, Property, PropertyDraft, PropertyPatch};
    use crate::storage::{CollectingSink, KeyValueStore, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;

    fn crud() -> CrudStore {
        CrudStore::new(PersistedStore::new(Arc::new(MemoryStore::new())))
    }

    fn villa() -> PropertyDraft {
        PropertyDraft {
            title: "Villa A".to_string(),
            price: 1_000_000,
            location: "Dubai Marina".to_string(),
            category: "exclusive".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let crud = crud();
        let created: Property = crud.create(villa()).await.unwrap();

        assert!(!created.meta.id.is_empty());
        assert_eq!(created.meta.created_at, created.meta.updated_at);

        let fetched: Property = crud.get_by_id(&created.meta.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Villa A");
        assert_eq!(fetched.price, 1_000_000);
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let crud = crud();
        for title in ["One", "Two", "Three"] {
            crud.create::<Property>(PropertyDraft {
                title: title.to_string(),
                ..villa()
            })
            .await
            .unwrap();
        }

        let titles: Vec<String> = crud
            .list::<Property>(&Filters::new())
            .await
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_field_and_timestamp() {
        let crud = crud();
        let created: Property = crud.create(villa()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated: Property = crud
            .update(
                &created.meta.id,
                PropertyPatch {
                    price: Some(1_250_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 1_250_000);
        assert!(updated.meta.updated_at > created.meta.updated_at);
        assert_eq!(updated.meta.created_at, created.meta.created_at);

        let mut expected = created.clone();
        expected.price = 1_250_000;
        expected.meta.updated_at = updated.meta.updated_at;
        assert_eq!(updated, expected);
        assert_eq!(crud.get_by_id::<Property>(&created.meta.id).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let crud = crud();
        let created: Property = crud.create(villa()).await.unwrap();

        crud.delete::<Property>(&created.meta.id).await.unwrap();
        let err = crud.delete::<Property>(&created.meta.id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(crud.load::<Property>().is_empty());
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let crud = crud();
        assert!(crud.get_by_id::<Property>("nope").await.unwrap_err().is_not_found());
        let err = crud
            .update::<Property>("nope", PropertyPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_before_write() {
        let crud = crud();
        let err = crud
            .create::<Property>(PropertyDraft {
                title: "  ".to_string(),
                ..villa()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title", .. }));
        assert!(crud.load::<Property>().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_underscore_id_resolves() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item(
                "developers",
                &json!([{"_id": "dev-legacy", "name": "Nakheel"}]).to_string(),
            )
            .unwrap();
        let crud = CrudStore::new(PersistedStore::new(backend));

        let developer: Developer = crud.get_by_id("dev-legacy").await.unwrap();
        assert_eq!(developer.name, "Nakheel");
    }

    #[tokio::test]
    async fn test_invalid_patch_is_rejected_before_write() {
        let crud = crud();
        let created: Property = crud.create(villa()).await.unwrap();

        let err = crud
            .update::<Property>(
                &created.meta.id,
                PropertyPatch {
                    title: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title", .. }));

        let err = crud
            .update::<Property>(
                &created.meta.id,
                PropertyPatch {
                    price: Some(-5),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "price", .. }));

        assert_eq!(crud.get_by_id::<Property>(&created.meta.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_legacy_nulls_do_not_cost_the_collection() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item(
                "properties",
                &json!([
                    {"id": "p1", "title": "Old villa", "location": "Jumeirah", "description": null, "featured": null},
                    {"id": "p2", "title": "Old flat", "location": "JLT", "price": 800000}
                ])
                .to_string(),
            )
            .unwrap();
        let crud = CrudStore::new(PersistedStore::new(backend));

        let listed = crud.list::<Property>(&Filters::new()).await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].description, "");
        assert!(!listed[0].featured);

        let created: Property = crud.create(villa()).await.unwrap();
        let ids: Vec<String> = crud
            .load::<Property>()
            .into_iter()
            .map(|p| p.meta.id)
            .collect();
        assert_eq!(ids, vec!["p1".to_string(), "p2".to_string(), created.meta.id]);
    }

    #[tokio::test]
    async fn test_malformed_record_is_hidden_but_kept() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item(
                "projects",
                &json!([
                    {"id": "proj-a", "name": "Creek Tower", "status": "planned"},
                    {"id": "proj-b", "name": "Marina Heights", "status": "ongoing"}
                ])
                .to_string(),
            )
            .unwrap();
        let sink = Arc::new(CollectingSink::new());
        let crud = CrudStore::new(PersistedStore::new(backend.clone()).with_sink(sink.clone()));

        let visible = crud.load::<Project>();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].meta.id, "proj-b");
        assert_eq!(sink.take()[0].event_name(), "parse_failed");

        crud.delete::<Project>("proj-b").await.unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&backend.get_item("projects").unwrap().unwrap()).unwrap();
        assert_eq!(raw, json!([{"id": "proj-a", "name": "Creek Tower", "status": "planned"}]));
    }

    #[tokio::test]
    async fn test_unreadable_collection_is_not_overwritten() {
        let backend = Arc::new(MemoryStore::new());
        backend.set_item("properties", "{truncated").unwrap();
        let crud = CrudStore::new(PersistedStore::new(backend.clone()));

        assert!(crud.list::<Property>(&Filters::new()).await.is_empty());
        let err = crud.create::<Property>(villa()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { collection: "properties" }));
        assert_eq!(backend.get_item("properties").unwrap().as_deref(), Some("{truncated"));
    }

    #[tokio::test]
    async fn test_clear_waits_for_latency() {
        let crud = CrudStore::with_latency(
            PersistedStore::new(Arc::new(MemoryStore::new())),
            Duration::from_millis(20),
        );
        crud.create::<Property>(villa()).await.unwrap();

        let started = std::time::Instant::now();
        crud.clear::<Property>().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(crud.load::<Property>().is_empty());
    }
}
