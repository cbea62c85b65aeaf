use super::{merge_fields, require_patched_text, require_text, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub comments: String,
    pub designation: String,
    pub image: Option<String>,
    /// 1 to 5 stars
    pub rating: Option<u8>,
    pub approved: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialDraft {
    pub name: String,
    pub email: String,
    pub comments: String,
    pub designation: String,
    pub image: Option<String>,
    pub rating: Option<u8>,
    pub approved: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
    pub designation: Option<String>,
    pub image: Option<Option<String>>,
    pub rating: Option<Option<u8>>,
    pub approved: Option<bool>,
}

impl Record for Testimonial {
    type Draft = TestimonialDraft;
    type Patch = TestimonialPatch;

    const COLLECTION: Collection = Collection::Testimonials;

    const FILTERS: FilterSchema = &[
        ("approved", FilterKind::Exact("approved")),
        ("minRating", FilterKind::Min("rating")),
        ("search", FilterKind::Search(&["name", "comments", "designation"])),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn validate(draft: &TestimonialDraft) -> StoreResult<()> {
        require_text("name", &draft.name)?;
        require_text("comments", &draft.comments)?;
        check_rating(draft.rating)
    }

    fn validate_patch(patch: &TestimonialPatch) -> StoreResult<()> {
        require_patched_text("name", &patch.name)?;
        require_patched_text("comments", &patch.comments)?;
        patch.rating.map_or(Ok(()), check_rating)
    }

    fn from_draft(meta: RecordMeta, draft: TestimonialDraft) -> Self {
        Self {
            meta,
            name: draft.name,
            email: draft.email,
            comments: draft.comments,
            designation: draft.designation,
            image: draft.image,
            rating: draft.rating,
            approved: draft.approved,
        }
    }

    fn apply(&mut self, patch: TestimonialPatch) {
        merge_fields!(self, patch; name, email, comments, designation, image, rating, approved);
    }
}

fn check_rating(rating: Option<u8>) -> StoreResult<()> {
    match rating {
        Some(rating) if !(1..=5).contains(&rating) => {
            Err(StoreError::invalid("rating", "must be between 1 and 5"))
        }
        _ => Ok(()),
    }
}
