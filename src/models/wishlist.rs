use super::{Collection, Property, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use serde::{Deserialize, Serialize};

/// A saved property. `property` is a snapshot taken when the entry was
/// created and is not refreshed when the property changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub property_id: String,
    pub property: Property,
    pub user_note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WishlistDraft {
    pub property: Property,
    pub user_note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WishlistPatch {
    pub user_note: Option<Option<String>>,
}

impl Record for WishlistEntry {
    type Draft = WishlistDraft;
    type Patch = WishlistPatch;

    const COLLECTION: Collection = Collection::Wishlist;

    const FILTERS: FilterSchema = &[("property", FilterKind::Exact("propertyId"))];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: WishlistDraft) -> Self {
        Self {
            meta,
            property_id: draft.property.meta.id.clone(),
            property: draft.property,
            user_note: draft.user_note,
        }
    }

    fn apply(&mut self, patch: WishlistPatch) {
        if let Some(note) = patch.user_note {
            self.user_note = note;
        }
    }
}
