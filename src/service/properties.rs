use super::ListingService;
use crate::crud::Filters;
use crate::error::StoreResult;
use crate::models::{Property, PropertyDraft, PropertyPatch};

impl ListingService {
    pub async fn get_properties(&self, filters: &Filters) -> Vec<Property> {
        self.crud.list(filters).await
    }

    pub async fn get_property(&self, id: &str) -> StoreResult<Property> {
        self.crud.get_by_id(id).await
    }

    pub async fn create_property(&self, draft: PropertyDraft) -> StoreResult<Property> {
        self.crud.create(draft).await
    }

    pub async fn update_property(&self, id: &str, patch: PropertyPatch) -> StoreResult<Property> {
        self.crud.update(id, patch).await
    }

    /// Wishlist entries for the property are left in place
    pub async fn delete_property(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<Property>(id).await
    }

    /// Case-insensitive match on title, location or description
    pub async fn search_properties(&self, term: &str) -> Vec<Property> {
        let filters = Filters::new().search(Property::SEARCH_FIELDS, term.trim());
        self.crud.list(&filters).await
    }

    pub async fn get_featured_properties(&self, limit: Option<usize>) -> Vec<Property> {
        let mut filters = Filters::new().equals("featured", true);
        if let Some(limit) = limit {
            filters = filters.limit(limit);
        }
        self.crud.list(&filters).await
    }

    pub async fn get_properties_by_category(&self, category: &str) -> Vec<Property> {
        self.crud
            .list(&Filters::new().equals("category", category))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::crud::Filters;
    use crate::error::StoreError;
    use crate::models::{Property, PropertyDraft, PropertyPatch, Record};
    use crate::service::test_support::*;
    use crate::service::ServiceOptions;
    use serde_json::json;

    fn draft(title: &str, category: &str, location: &str, price: i64) -> PropertyDraft {
        PropertyDraft {
            title: title.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            price,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_filter_by_category() {
        let service = empty_service();
        service
            .create_property(draft("Villa A", "exclusive", "Dubai Marina", 1_000_000))
            .await
            .unwrap();

        let exclusive = service
            .get_properties(&Filters::new().equals("category", "exclusive"))
            .await;
        assert_eq!(exclusive.len(), 1);
        assert_eq!(exclusive[0].title, "Villa A");
    }

    #[tokio::test]
    async fn test_category_filter_returns_exact_subset() {
        let service = empty_service();
        for (title, category) in [
            ("A", "exclusive"),
            ("B", "ready"),
            ("C", "exclusive"),
            ("D", "Exclusive"),
            ("E", ""),
        ] {
            service
                .create_property(draft(title, category, "Dubai", 1))
                .await
                .unwrap();
        }

        let all = service.get_properties(&Filters::new()).await;
        let expected: Vec<_> = all.iter().filter(|p| p.category == "exclusive").cloned().collect();

        let filtered = service.get_properties_by_category("exclusive").await;
        assert_eq!(filtered, expected);
        assert_eq!(filtered.len(), 2);
    }

    #[tokio::test]
    async fn test_params_filters_price_range_and_location() {
        let service = empty_service();
        service.create_property(draft("Cheap", "ready", "Business Bay", 900_000)).await.unwrap();
        service.create_property(draft("Mid", "ready", "Dubai Marina", 2_000_000)).await.unwrap();
        service.create_property(draft("High", "ready", "dubai marina", 9_000_000)).await.unwrap();

        let filters = Filters::from_params(
            [("location", "MARINA"), ("maxPrice", "5000000"), ("sort", "price")],
            Property::FILTERS,
        );
        let found = service.get_properties(&filters).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Mid");
    }

    #[tokio::test]
    async fn test_search_featured_and_update() {
        let service = service_with(ServiceOptions::default());

        let marina = service.search_properties("marina").await;
        assert!(!marina.is_empty());
        assert!(marina.iter().all(|p| {
            let text = format!("{} {} {}", p.title, p.location, p.description).to_lowercase();
            text.contains("marina")
        }));

        let featured = service.get_featured_properties(Some(1)).await;
        assert_eq!(featured.len(), 1);
        assert!(featured[0].featured);

        let id = featured[0].meta.id.clone();
        let before = service.get_property(&id).await.unwrap();
        let after = service
            .update_property(
                &id,
                PropertyPatch {
                    featured: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!after.featured);
        assert_eq!(after.title, before.title);
        assert_eq!(after.price, before.price);
    }

    #[tokio::test]
    async fn test_delete_property() {
        let service = empty_service();
        let created = service
            .create_property(draft("Temp", "ready", "JVC", 500_000))
            .await
            .unwrap();

        service.delete_property(&created.meta.id).await.unwrap();
        assert!(service.get_property(&created.meta.id).await.unwrap_err().is_not_found());
        assert!(service.delete_property(&created.meta.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_property_patch_leaves_record_untouched() {
        let service = empty_service();
        let created = service
            .create_property(draft("Villa A", "exclusive", "Dubai Marina", 1_000_000))
            .await
            .unwrap();

        for patch in [
            PropertyPatch {
                title: Some("  ".to_string()),
                ..Default::default()
            },
            PropertyPatch {
                price: Some(-5),
                ..Default::default()
            },
            PropertyPatch {
                location: Some(String::new()),
                ..Default::default()
            },
        ] {
            let err = service.update_property(&created.meta.id, patch).await.unwrap_err();
            assert!(matches!(err, StoreError::Validation { .. }));
        }
        assert_eq!(service.get_property(&created.meta.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_legacy_null_fields_survive_a_create() {
        let service = empty_service();
        service.store().write_value(
            "properties",
            &json!([
                {"id": "p1", "title": "Old villa", "location": "Jumeirah", "description": null},
                {"id": "p2", "title": "Old flat", "location": "JLT", "featured": null}
            ]),
        );

        assert_eq!(service.get_properties(&Filters::new()).await.len(), 2);

        let created = service
            .create_property(draft("Villa A", "exclusive", "Dubai Marina", 1_000_000))
            .await
            .unwrap();
        let ids: Vec<String> = service
            .get_properties(&Filters::new())
            .await
            .into_iter()
            .map(|p| p.meta.id)
            .collect();
        assert_eq!(ids, vec!["p1".to_string(), "p2".to_string(), created.meta.id]);
    }
}
