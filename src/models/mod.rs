/// Copy every `Some` field of a patch onto the record
macro_rules! merge_fields {
    ($record:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $record.$field = value;
            }
        )+
    };
}
pub(crate) use merge_fields;

pub mod blog;
pub mod contact;
pub mod developer;
pub mod project;
pub mod property;
pub mod testimonial;
pub mod wishlist;

pub use blog::{Blog, BlogDraft, BlogPatch};
pub use contact::{ContactDraft, ContactPatch, ContactStatus, ContactSubmission};
pub use developer::{ContactInfo, ContactInfoPatch, Developer, DeveloperDraft, DeveloperPatch};
pub use project::{Project, ProjectDraft, ProjectPatch, ProjectStatus};
pub use property::{Property, PropertyDraft, PropertyPatch};
pub use testimonial::{Testimonial, TestimonialDraft, TestimonialPatch};
pub use wishlist::{WishlistDraft, WishlistEntry, WishlistPatch};

use crate::crud::FilterSchema;
use crate::error::StoreResult;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The persisted collections, one storage key each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Properties,
    Projects,
    Blogs,
    Developers,
    Testimonials,
    ContactSubmissions,
    Wishlist,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Properties,
        Collection::Projects,
        Collection::Blogs,
        Collection::Developers,
        Collection::Testimonials,
        Collection::ContactSubmissions,
        Collection::Wishlist,
    ];

    /// Storage key; partners share the developers key
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Properties => "properties",
            Collection::Projects => "projects",
            Collection::Blogs => "blogs",
            Collection::Developers => "developers",
            Collection::Testimonials => "testimonials",
            Collection::ContactSubmissions => "contact_submissions",
            Collection::Wishlist => "wishlist",
        }
    }

    /// Singular name used in error messages
    pub fn record_name(self) -> &'static str {
        match self {
            Collection::Properties => "property",
            Collection::Projects => "project",
            Collection::Blogs => "blog",
            Collection::Developers => "developer",
            Collection::Testimonials => "testimonial",
            Collection::ContactSubmissions => "contact submission",
            Collection::Wishlist => "wishlist entry",
        }
    }
}

/// Identity and timestamps shared by every record.
///
/// `id` is canonical. Legacy data may carry `_id` instead (or both); it is
/// accepted on read and never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MetaRepr")]
pub struct RecordMeta {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct MetaRepr {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    legacy_id: Option<String>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<MetaRepr> for RecordMeta {
    fn from(repr: MetaRepr) -> Self {
        let created_at = repr.created_at.unwrap_or_default();
        Self {
            id: repr.id.or(repr.legacy_id).unwrap_or_default(),
            created_at,
            updated_at: repr.updated_at.unwrap_or(created_at),
        }
    }
}

impl RecordMeta {
    pub fn new(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A typed entity stored in one collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Creation input, without identity or timestamps
    type Draft: Send;
    /// Partial update; `None` fields are left untouched
    type Patch: Send;

    const COLLECTION: Collection;

    /// Configuration keys understood by [`crate::crud::Filters::from_params`]
    const FILTERS: FilterSchema = &[];

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Reject drafts that would produce an unusable record
    fn validate(_draft: &Self::Draft) -> StoreResult<()> {
        Ok(())
    }

    /// Reject patches that would leave the record unusable; only the fields
    /// the patch sets are checked
    fn validate_patch(_patch: &Self::Patch) -> StoreResult<()> {
        Ok(())
    }

    fn from_draft(meta: RecordMeta, draft: Self::Draft) -> Self;

    fn apply(&mut self, patch: Self::Patch);

    fn id(&self) -> &str {
        &self.meta().id
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(crate::error::StoreError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// [`require_text`] for a patch field, skipped when the field is unset
pub(crate) fn require_patched_text(field: &'static str, value: &Option<String>) -> StoreResult<()> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}
