use super::ListingService;
use crate::crud::Filters;
use crate::error::{StoreError, StoreResult};
use crate::models::{Collection, Property, WishlistDraft, WishlistEntry, WishlistPatch};
use tracing::debug;

impl ListingService {
    /// Save a property to the wishlist.
    ///
    /// Fails with `NotFound` when the property does not exist and with
    /// `AlreadyExists` when it is already saved; an existing entry is never
    /// replaced.
    pub async fn add_to_wishlist(
        &self,
        property_id: &str,
        user_note: Option<String>,
    ) -> StoreResult<WishlistEntry> {
        let property: Property = self.crud.get_by_id(property_id).await?;

        if self.is_in_wishlist(property_id) {
            return Err(StoreError::AlreadyExists {
                collection: Collection::Wishlist.record_name(),
                id: property_id.to_string(),
            });
        }

        let entry: WishlistEntry = self
            .crud
            .create(WishlistDraft {
                property,
                user_note,
            })
            .await?;
        debug!(entry = %entry.meta.id, property_id, "Added to wishlist");
        Ok(entry)
    }

    pub async fn get_wishlist(&self) -> Vec<WishlistEntry> {
        self.crud.list(&Filters::new()).await
    }

    pub fn is_in_wishlist(&self, property_id: &str) -> bool {
        self.crud
            .load::<WishlistEntry>()
            .iter()
            .any(|entry| entry.property_id == property_id)
    }

    pub async fn update_wishlist_note(
        &self,
        entry_id: &str,
        user_note: Option<String>,
    ) -> StoreResult<WishlistEntry> {
        self.crud
            .update(
                entry_id,
                WishlistPatch {
                    user_note: Some(user_note),
                },
            )
            .await
    }

    pub async fn remove_from_wishlist(&self, entry_id: &str) -> StoreResult<()> {
        self.crud.delete::<WishlistEntry>(entry_id).await
    }

    /// Remove the entry saved for `property_id`
    pub async fn remove_property_from_wishlist(&self, property_id: &str) -> StoreResult<()> {
        let entry = self
            .crud
            .load::<WishlistEntry>()
            .into_iter()
            .find(|entry| entry.property_id == property_id)
            .ok_or_else(|| StoreError::not_found(Collection::Wishlist.record_name(), property_id))?;
        self.remove_from_wishlist(&entry.meta.id).await
    }

    pub async fn clear_wishlist(&self) {
        self.crud.clear::<WishlistEntry>().await;
    }
}
