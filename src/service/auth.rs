use super::ListingService;
use crate::error::{StoreError, StoreResult};
use crate::remote::{RemoteBackend, UserProfile};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) const TOKEN_KEY: &str = "authToken";
pub(crate) const USER_KEY: &str = "user";
pub(crate) const ADMIN_SESSION_KEY: &str = "isAdminLoggedIn";

/// Fixed back-office login, checked locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email.trim().to_lowercase() && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin@brokerage.local", "admin123")
    }
}

impl ListingService {
    /// Sign in against the remote backend and persist the session
    pub async fn login(&self, email: &str, password: &str) -> StoreResult<UserProfile> {
        let backend = self.backend.as_ref().ok_or(StoreError::RemoteUnavailable)?;
        let session = backend.login(email, password).await?;

        let store = self.crud.persisted();
        store.write_value(TOKEN_KEY, &session.token);
        store.write_value(USER_KEY, &session.user);
        info!(user = %session.user.id, "Signed in");
        Ok(session.user)
    }

    /// Check the fixed back-office credentials
    pub fn admin_login(&self, email: &str, password: &str) -> StoreResult<()> {
        if !self.admin.matches(email, password) {
            warn!("Rejected back-office login");
            return Err(StoreError::Unauthorized("invalid admin credentials".to_string()));
        }
        self.crud.persisted().write_value(ADMIN_SESSION_KEY, &true);
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.crud
            .persisted()
            .read_value::<bool>(ADMIN_SESSION_KEY)
            .unwrap_or(false)
    }

    /// Drop the backend session and the back-office flag
    pub fn logout(&self) {
        let store = self.crud.persisted();
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        store.remove(ADMIN_SESSION_KEY);
    }

    pub fn session_token(&self) -> Option<String> {
        self.crud
            .persisted()
            .read_value::<String>(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.crud.persisted().read_value(USER_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token().is_some()
    }

    /// Backend and token, when a remote call may be attempted
    pub(crate) fn remote_session(&self) -> Option<(Arc<dyn RemoteBackend>, String)> {
        let backend = self.backend.clone()?;
        let token = self.session_token()?;
        Some((backend, token))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::remote::scripted::{Outcome, ScriptedBackend};
    use crate::service::test_support::*;
    use crate::service::{AdminCredentials, Seed, ServiceOptions};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_admin_login_checks_credentials() {
        let service = service_with(ServiceOptions {
            admin: AdminCredentials::new("Ops@Example.com", "s3cret"),
            ..Default::default()
        });

        let err = service.admin_login("ops@example.com", "wrong").unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(_)));
        assert!(!service.is_admin());

        service.admin_login(" OPS@example.com ", "s3cret").unwrap();
        assert!(service.is_admin());

        service.logout();
        assert!(!service.is_admin());
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let backend = Arc::new(ScriptedBackend::new(Outcome::Data(json!({
            "token": "tok-123",
            "user": {"_id": "u1", "name": "Admin", "email_address": "admin@example.com"}
        }))));
        let service = service_with(ServiceOptions {
            seed: Seed::empty(),
            backend: Some(backend),
            ..Default::default()
        });

        let user = service.login("admin@example.com", "pw").await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(service.session_token().as_deref(), Some("tok-123"));
        assert_eq!(service.current_user(), Some(user));

        service.logout();
        assert!(!service.is_authenticated());
        assert!(service.current_user().is_none());
    }

    #[tokio::test]
    async fn test_rejected_login_is_unauthorized() {
        let backend = Arc::new(ScriptedBackend::new(Outcome::Http(
            401,
            json!({"response_code": 401, "response_message": "Invalid credentials"}).to_string(),
        )));
        let service = service_with(ServiceOptions {
            seed: Seed::empty(),
            backend: Some(backend),
            ..Default::default()
        });

        let err = service.login("admin@example.com", "bad").await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(ref msg) if msg.contains("Invalid credentials")));
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_without_backend_is_unavailable() {
        let service = empty_service();
        let err = service.login("a@b.c", "pw").await.unwrap_err();
        assert!(matches!(err, StoreError::RemoteUnavailable));
        assert!(!service.is_authenticated());
    }
}
