//! Record store for a real-estate brokerage site and its back-office.
//!
//! Collections of typed records (properties, projects, blogs, developers,
//! testimonials, contact submissions, wishlist entries) are kept as JSON in a
//! key-value store. Blogs try a remote backend first and fall back to the
//! local collection when the backend is unreachable.

pub mod config;
pub mod crud;
pub mod error;
pub mod models;
pub mod remote;
pub mod service;
pub mod storage;

pub use config::StoreConfig;
pub use crud::Filters;
pub use error::{StoreError, StoreResult};
pub use service::{ApiResponse, DashboardStats, ListingService, Seed, ServiceOptions};
pub use storage::{FileStore, MemoryStore, PersistedStore};
