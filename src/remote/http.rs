use super::error::RemoteError;
use super::traits::RemoteBackend;
use super::types::{
    decode_envelope, BlogUpload, ImageUpload, ListPayload, LoginRequest, RemoteBlog,
    RemoteTestimonial, Session, TestimonialUpload,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

const LOGIN_PATH: &str = "/api/users/login/web";
const BLOG_READ_PATH: &str = "/api/blog/read";
const BLOG_CREATE_PATH: &str = "/api/blog/create";
const TESTIMONIAL_READ_PATH: &str = "/api/testimonial/read";
const TESTIMONIAL_CREATE_PATH: &str = "/api/testimonial/create";

/// reqwest-based client for the brokerage backend
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("brokerage-store/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token).header("token", token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RemoteError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Backend responded");
        let result = decode_envelope(status.as_u16(), &body);
        if let Err(e) = &result {
            warn!(status = status.as_u16(), error = %e, "Backend call failed");
        }
        result
    }
}

fn image_part(image: &ImageUpload) -> Result<Part, RemoteError> {
    Ok(Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.mime_type)?)
}

#[async_trait]
impl RemoteBackend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Session, RemoteError> {
        info!(email, "Signing in to backend");
        let request = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(&LoginRequest {
                email_address: email,
                password,
            });
        self.send(request).await
    }

    async fn list_blogs(&self, token: &str) -> Result<Vec<RemoteBlog>, RemoteError> {
        let request = Self::authorize(self.client.get(self.url(BLOG_READ_PATH)), Some(token));
        let payload: ListPayload<RemoteBlog> = self.send(request).await?;
        Ok(payload.into_vec())
    }

    async fn create_blog(&self, token: &str, upload: &BlogUpload) -> Result<RemoteBlog, RemoteError> {
        let mut form = Form::new()
            .text("title", upload.title.clone())
            .text("content", upload.content.clone())
            .text("category", upload.category.clone())
            .text("tags", upload.tags.join(","));
        if let Some(image) = &upload.image {
            form = form.part("image", image_part(image)?);
        }

        let request = Self::authorize(
            self.client.post(self.url(BLOG_CREATE_PATH)).multipart(form),
            Some(token),
        );
        self.send(request).await
    }

    async fn list_testimonials(&self, token: Option<&str>) -> Result<Vec<RemoteTestimonial>, RemoteError> {
        let request = Self::authorize(self.client.get(self.url(TESTIMONIAL_READ_PATH)), token);
        let payload: ListPayload<RemoteTestimonial> = self.send(request).await?;
        Ok(payload.into_vec())
    }

    async fn create_testimonial(
        &self,
        token: Option<&str>,
        upload: &TestimonialUpload,
    ) -> Result<RemoteTestimonial, RemoteError> {
        let mut form = Form::new()
            .text("name", upload.name.clone())
            .text("email", upload.email.clone())
            .text("comments", upload.comments.clone())
            .text("designation", upload.designation.clone());
        if let Some(image) = &upload.image {
            form = form.part("image", image_part(image)?);
        }

        let request = Self::authorize(
            self.client
                .post(self.url(TESTIMONIAL_CREATE_PATH))
                .multipart(form),
            token,
        );
        self.send(request).await
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let backend = HttpBackend::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(backend.url(BLOG_READ_PATH), "http://localhost:5000/api/blog/read");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        // Port 9 (discard) is closed on loopback in test environments
        let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = backend.list_blogs("token").await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
        assert!(!err.is_auth_failure());
    }
}
