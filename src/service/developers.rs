use super::ListingService;
use crate::crud::Filters;
use crate::error::StoreResult;
use crate::models::{Developer, DeveloperDraft, DeveloperPatch};

impl ListingService {
    pub async fn get_developers(&self, filters: &Filters) -> Vec<Developer> {
        self.crud.list(filters).await
    }

    pub async fn get_developer(&self, id: &str) -> StoreResult<Developer> {
        self.crud.get_by_id(id).await
    }

    pub async fn create_developer(&self, draft: DeveloperDraft) -> StoreResult<Developer> {
        self.crud.create(draft).await
    }

    /// Nested `contact_info` fields are merged one by one
    pub async fn update_developer(&self, id: &str, patch: DeveloperPatch) -> StoreResult<Developer> {
        self.crud.update(id, patch).await
    }

    pub async fn delete_developer(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<Developer>(id).await
    }

    // Partners are developers under their older name; same collection.

    pub async fn get_partners(&self, filters: &Filters) -> Vec<Developer> {
        self.get_developers(filters).await
    }

    pub async fn get_partner(&self, id: &str) -> StoreResult<Developer> {
        self.get_developer(id).await
    }

    pub async fn create_partner(&self, draft: DeveloperDraft) -> StoreResult<Developer> {
        self.create_developer(draft).await
    }

    pub async fn update_partner(&self, id: &str, patch: DeveloperPatch) -> StoreResult<Developer> {
        self.update_developer(id, patch).await
    }

    pub async fn delete_partner(&self, id: &str) -> StoreResult<()> {
        self.delete_developer(id).await
    }
}
