//! Per-entity method surface over the generic CRUD helpers.
//!
//! One `impl ListingService` block per entity lives in the submodules.

pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod developers;
pub mod projects;
pub mod properties;
pub mod seed;
pub mod testimonials;
pub mod wishlist;

pub use auth::AdminCredentials;
pub use seed::Seed;

use crate::config::StoreConfig;
use crate::crud::CrudStore;
use crate::models::{
    Blog, Collection, ContactStatus, ContactSubmission, Developer, Project, Property, Testimonial,
    WishlistEntry,
};
use crate::remote::{HttpBackend, RemoteBackend};
use crate::storage::{FileStore, PersistedStore};
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Response shape shared by local and remote blog results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Record counts for the back-office overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub properties: usize,
    pub featured_properties: usize,
    pub projects: usize,
    pub blogs: usize,
    pub developers: usize,
    pub testimonials: usize,
    pub contact_submissions: usize,
    pub unread_contact_submissions: usize,
    pub wishlist: usize,
}

/// Construction options for [`ListingService`]
pub struct ServiceOptions {
    pub latency: Duration,
    pub seed: Seed,
    pub backend: Option<Arc<dyn RemoteBackend>>,
    pub admin: AdminCredentials,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            latency: Duration::ZERO,
            seed: Seed::builtin(),
            backend: None,
            admin: AdminCredentials::default(),
        }
    }
}

/// The brokerage data layer: properties, projects, blogs, developers,
/// testimonials, contact submissions and the wishlist.
pub struct ListingService {
    crud: CrudStore,
    backend: Option<Arc<dyn RemoteBackend>>,
    admin: AdminCredentials,
}

impl ListingService {
    /// Create a service over `store` with the built-in seed data
    pub fn new(store: PersistedStore) -> Self {
        Self::with_options(store, ServiceOptions::default())
    }

    /// Create a service, seeding every collection that is still absent
    pub fn with_options(store: PersistedStore, options: ServiceOptions) -> Self {
        options.seed.apply(&store);

        if let Some(backend) = &options.backend {
            info!(backend = backend.backend_name(), "Remote backend enabled");
        }

        Self {
            crud: CrudStore::with_latency(store, options.latency),
            backend: options.backend,
            admin: options.admin,
        }
    }

    /// Open the file-backed store and backend described by `config`
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let files = FileStore::open(&config.data_dir).with_context(|| {
            format!("Failed to open data directory {}", config.data_dir.display())
        })?;
        let store = PersistedStore::new(Arc::new(files));

        let backend = match &config.api_base_url {
            Some(url) => {
                let backend = HttpBackend::new(url.clone(), config.http_timeout())?;
                Some(Arc::new(backend) as Arc<dyn RemoteBackend>)
            }
            None => None,
        };

        Ok(Self::with_options(
            store,
            ServiceOptions {
                latency: config.latency(),
                seed: Seed::builtin(),
                backend,
                admin: AdminCredentials::new(&config.admin_email, &config.admin_password),
            },
        ))
    }

    pub fn store(&self) -> &PersistedStore {
        self.crud.persisted()
    }

    /// Counts per collection, read without artificial delay
    pub fn dashboard_stats(&self) -> DashboardStats {
        let properties = self.crud.load::<Property>();
        let contacts = self.crud.load::<ContactSubmission>();

        DashboardStats {
            featured_properties: properties.iter().filter(|p| p.featured).count(),
            properties: properties.len(),
            projects: self.crud.load::<Project>().len(),
            blogs: self.crud.load::<Blog>().len(),
            developers: self.crud.load::<Developer>().len(),
            testimonials: self.crud.load::<Testimonial>().len(),
            unread_contact_submissions: contacts
                .iter()
                .filter(|c| c.status == ContactStatus::New)
                .count(),
            contact_submissions: contacts.len(),
            wishlist: self.crud.load::<WishlistEntry>().len(),
        }
    }

    /// Number of records stored in `collection`
    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Properties => self.crud.load::<Property>().len(),
            Collection::Projects => self.crud.load::<Project>().len(),
            Collection::Blogs => self.crud.load::<Blog>().len(),
            Collection::Developers => self.crud.load::<Developer>().len(),
            Collection::Testimonials => self.crud.load::<Testimonial>().len(),
            Collection::ContactSubmissions => self.crud.load::<ContactSubmission>().len(),
            Collection::Wishlist => self.crud.load::<WishlistEntry>().len(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::storage::{CollectingSink, MemoryStore};

    pub fn empty_service() -> ListingService {
        service_with(ServiceOptions {
            seed: Seed::empty(),
            ..Default::default()
        })
    }

    pub fn service_with(options: ServiceOptions) -> ListingService {
        let store = PersistedStore::new(Arc::new(MemoryStore::new()));
        ListingService::with_options(store, options)
    }

    pub fn service_with_sink(options: ServiceOptions) -> (ListingService, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let store = PersistedStore::new(Arc::new(MemoryStore::new())).with_sink(sink.clone());
        (ListingService::with_options(store, options), sink)
    }
}
