use super::{merge_fields, require_patched_text, require_text, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use crate::error::StoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A development project, usually off-plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Developer name as shown on the listing
    pub developer: String,
    pub status: ProjectStatus,
    pub starting_price: Option<i64>,
    /// Expected handover, free text such as `Q4 2026`
    pub completion_date: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub developer: String,
    pub status: ProjectStatus,
    pub starting_price: Option<i64>,
    pub completion_date: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub developer: Option<String>,
    pub status: Option<ProjectStatus>,
    pub starting_price: Option<Option<i64>>,
    pub completion_date: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl Record for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const COLLECTION: Collection = Collection::Projects;

    const FILTERS: FilterSchema = &[
        ("status", FilterKind::Exact("status")),
        ("featured", FilterKind::Exact("featured")),
        ("developer", FilterKind::Contains("developer")),
        ("location", FilterKind::Contains("location")),
        ("minPrice", FilterKind::Min("starting_price")),
        ("maxPrice", FilterKind::Max("starting_price")),
        ("search", FilterKind::Search(Project::SEARCH_FIELDS)),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn validate(draft: &ProjectDraft) -> StoreResult<()> {
        require_text("name", &draft.name)
    }

    fn validate_patch(patch: &ProjectPatch) -> StoreResult<()> {
        require_patched_text("name", &patch.name)
    }

    fn from_draft(meta: RecordMeta, draft: ProjectDraft) -> Self {
        Self {
            meta,
            name: draft.name,
            description: draft.description,
            location: draft.location,
            developer: draft.developer,
            status: draft.status,
            starting_price: draft.starting_price,
            completion_date: draft.completion_date,
            images: draft.images,
            amenities: draft.amenities,
            featured: draft.featured,
        }
    }

    fn apply(&mut self, patch: ProjectPatch) {
        merge_fields!(self, patch;
            name, description, location, developer, status, starting_price,
            completion_date, images, amenities, featured,
        );
    }
}

impl Project {
    pub const SEARCH_FIELDS: &'static [&'static str] = &["name", "location", "developer"];
}
