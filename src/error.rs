use thiserror::Error;

use crate::remote::RemoteError;

/// Errors surfaced to callers of the record store.
///
/// Storage failures (quota, corrupt JSON) are absorbed by
/// [`crate::storage::PersistedStore`] and reported as diagnostics. The one
/// exception is `Unreadable`: a mutation refuses to overwrite a collection
/// whose stored value could not be read.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("{collection} record already exists: {id}")]
    AlreadyExists { collection: &'static str, id: String },

    #[error("Stored {collection} collection is unreadable; refusing to overwrite it")]
    Unreadable { collection: &'static str },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Remote backend not configured")]
    RemoteUnavailable,

    #[error("Remote backend error: {0}")]
    Remote(RemoteError),
}

impl StoreError {
    pub(crate) fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection,
            id: id.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<RemoteError> for StoreError {
    fn from(err: RemoteError) -> Self {
        if err.is_auth_failure() {
            StoreError::Unauthorized(err.to_string())
        } else {
            StoreError::Remote(err)
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
