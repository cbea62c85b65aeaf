use super::{merge_fields, require_text, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Responded,
}

/// An enquiry left through the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// Set when the enquiry came from a property page
    pub property_id: Option<String>,
    pub status: ContactStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub property_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    pub subject: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ContactStatus>,
}

impl Record for ContactSubmission {
    type Draft = ContactDraft;
    type Patch = ContactPatch;

    const COLLECTION: Collection = Collection::ContactSubmissions;

    const FILTERS: FilterSchema = &[
        ("status", FilterKind::Exact("status")),
        ("property", FilterKind::Exact("property_id")),
        ("search", FilterKind::Search(&["name", "email", "subject", "message"])),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn validate(draft: &ContactDraft) -> StoreResult<()> {
        require_text("name", &draft.name)?;
        require_text("message", &draft.message)?;
        if !draft.email.contains('@') {
            return Err(StoreError::invalid("email", "must be an email address"));
        }
        Ok(())
    }

    fn from_draft(meta: RecordMeta, draft: ContactDraft) -> Self {
        Self {
            meta,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            subject: draft.subject,
            message: draft.message,
            property_id: draft.property_id,
            status: ContactStatus::New,
        }
    }

    fn apply(&mut self, patch: ContactPatch) {
        merge_fields!(self, patch; subject, phone, status);
    }
}
