use super::{merge_fields, Collection, Record, RecordMeta};
use crate::crud::{FilterKind, FilterSchema};
use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A blog post. Stored locally, or fetched from the remote backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub published: Option<bool>,
}

impl Record for Blog {
    type Draft = BlogDraft;
    type Patch = BlogPatch;

    const COLLECTION: Collection = Collection::Blogs;

    const FILTERS: FilterSchema = &[
        ("category", FilterKind::Exact("category")),
        ("published", FilterKind::Exact("published")),
        ("author", FilterKind::Contains("author")),
        ("tag", FilterKind::Contains("tags")),
        ("search", FilterKind::Search(&["title", "content", "tags"])),
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    // Blogs are accepted as-is; blanks are filled in by `normalized`.
    fn from_draft(meta: RecordMeta, draft: BlogDraft) -> Self {
        Self {
            meta,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            author: draft.author,
            tags: draft.tags,
            image_url: draft.image_url,
            published: draft.published,
        }
    }

    fn apply(&mut self, patch: BlogPatch) {
        merge_fields!(self, patch; title, content, category, author, tags, image_url, published);
    }
}

impl Blog {
    /// Replace blank display fields with safe placeholders
    pub fn normalized(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = UNTITLED.to_string();
        }
        if self.category.trim().is_empty() {
            self.category = UNCATEGORIZED.to_string();
        }
        self.tags.retain(|t| !t.trim().is_empty());
        self
    }
}
