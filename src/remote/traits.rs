use super::error::RemoteError;
use super::types::{
    BlogUpload, RemoteBlog, RemoteTestimonial, Session, TestimonialUpload,
};
use async_trait::async_trait;

/// The external blog/testimonial backend.
///
/// Kept behind a trait so the service can run against an in-process double.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Exchange credentials for a session token and user profile
    async fn login(&self, email: &str, password: &str) -> Result<Session, RemoteError>;

    async fn list_blogs(&self, token: &str) -> Result<Vec<RemoteBlog>, RemoteError>;

    async fn create_blog(&self, token: &str, upload: &BlogUpload) -> Result<RemoteBlog, RemoteError>;

    async fn list_testimonials(&self, token: Option<&str>) -> Result<Vec<RemoteTestimonial>, RemoteError>;

    async fn create_testimonial(
        &self,
        token: Option<&str>,
        upload: &TestimonialUpload,
    ) -> Result<RemoteTestimonial, RemoteError>;

    /// Name used in log lines
    fn backend_name(&self) -> &'static str;
}
