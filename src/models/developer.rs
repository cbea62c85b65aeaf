use super::{merge_fields, require_patched_text, require_text, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use crate::error::StoreResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub mobile_no: String,
    pub phone: String,
    pub address: String,
}

/// Per-field update of [`ContactInfo`]; untouched fields keep their values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactInfoPatch {
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn apply(&mut self, patch: ContactInfoPatch) {
        merge_fields!(self, patch; email, mobile_no, phone, address);
    }
}

/// A developer, shown on the site as a partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Developer {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<u16>,
    pub projects_count: u32,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeveloperDraft {
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<u16>,
    pub projects_count: u32,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeveloperPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub established_year: Option<Option<u16>>,
    pub projects_count: Option<u32>,
    pub contact_info: Option<ContactInfoPatch>,
}

impl Record for Developer {
    type Draft = DeveloperDraft;
    type Patch = DeveloperPatch;

    const COLLECTION: Collection = Collection::Developers;

    const FILTERS: FilterSchema = &[
        ("name", FilterKind::Contains("name")),
        ("search", FilterKind::Search(&["name", "description"])),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn validate(draft: &DeveloperDraft) -> StoreResult<()> {
        require_text("name", &draft.name)
    }

    fn validate_patch(patch: &DeveloperPatch) -> StoreResult<()> {
        require_patched_text("name", &patch.name)
    }

    fn from_draft(meta: RecordMeta, draft: DeveloperDraft) -> Self {
        Self {
            meta,
            name: draft.name,
            description: draft.description,
            logo: draft.logo,
            website: draft.website,
            established_year: draft.established_year,
            projects_count: draft.projects_count,
            contact_info: draft.contact_info,
        }
    }

    fn apply(&mut self, patch: DeveloperPatch) {
        merge_fields!(self, patch; name, description, logo, website, established_year, projects_count);
        if let Some(contact) = patch.contact_info {
            self.contact_info.apply(contact);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_contact_patch_keeps_other_fields() {
        let mut developer = Developer {
            name: "Emaar".to_string(),
            contact_info: ContactInfo {
                email: "sales@emaar.example".to_string(),
                mobile_no: "+971500000000".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        developer.apply(DeveloperPatch {
            contact_info: Some(ContactInfoPatch {
                mobile_no: Some("+971511111111".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(developer.name, "Emaar");
        assert_eq!(developer.contact_info.email, "sales@emaar.example");
        assert_eq!(developer.contact_info.mobile_no, "+971511111111");
    }
}
