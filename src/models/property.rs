use super::{merge_fields, require_patched_text, require_text, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// A listed property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub description: String,
    /// Asking price in AED
    pub price: i64,
    pub location: String,
    /// Listing segment, e.g. `exclusive`, `offplan`, `ready`
    pub category: String,
    pub property_type: String,
    pub status: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: Option<f64>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub developer_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub category: String,
    pub property_type: String,
    pub status: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: Option<f64>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub developer_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub bedrooms: Option<Option<u32>>,
    pub bathrooms: Option<Option<u32>>,
    pub area_sqft: Option<Option<f64>>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub developer_id: Option<Option<String>>,
}

impl Record for Property {
    type Draft = PropertyDraft;
    type Patch = PropertyPatch;

    const COLLECTION: Collection = Collection::Properties;

    const FILTERS: FilterSchema = &[
        ("category", FilterKind::Exact("category")),
        ("status", FilterKind::Exact("status")),
        ("type", FilterKind::Exact("property_type")),
        ("featured", FilterKind::Exact("featured")),
        ("developer", FilterKind::Exact("developer_id")),
        ("location", FilterKind::Contains("location")),
        ("minPrice", FilterKind::Min("price")),
        ("maxPrice", FilterKind::Max("price")),
        ("bedrooms", FilterKind::Min("bedrooms")),
        ("search", FilterKind::Search(Property::SEARCH_FIELDS)),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn validate(draft: &PropertyDraft) -> StoreResult<()> {
        require_text("title", &draft.title)?;
        require_text("location", &draft.location)?;
        check_price(draft.price)
    }

    fn validate_patch(patch: &PropertyPatch) -> StoreResult<()> {
        require_patched_text("title", &patch.title)?;
        require_patched_text("location", &patch.location)?;
        patch.price.map_or(Ok(()), check_price)
    }

    fn from_draft(meta: RecordMeta, draft: PropertyDraft) -> Self {
        Self {
            meta,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            location: draft.location,
            category: draft.category,
            property_type: draft.property_type,
            status: draft.status,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            area_sqft: draft.area_sqft,
            amenities: draft.amenities,
            images: draft.images,
            featured: draft.featured,
            developer_id: draft.developer_id,
        }
    }

    fn apply(&mut self, patch: PropertyPatch) {
        merge_fields!(self, patch;
            title, description, price, location, category, property_type, status,
            bedrooms, bathrooms, area_sqft, amenities, images, featured, developer_id,
        );
    }
}

fn check_price(price: i64) -> StoreResult<()> {
    if price < 0 {
        return Err(StoreError::invalid("price", "must not be negative"));
    }
    Ok(())
}

impl Property {
    /// Fields matched by free-text property search
    pub const SEARCH_FIELDS: &'static [&'static str] = &["title", "location", "description"];
}
