//! In-process backend double that replays canned outcomes.

use super::error::RemoteError;
use super::traits::RemoteBackend;
use super::types::{BlogUpload, RemoteBlog, RemoteTestimonial, Session, TestimonialUpload};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// What the double should do on its next call
#[derive(Clone)]
pub enum Outcome {
    /// Answer with this `response_data` decoded through the real envelope path
    Data(Value),
    /// Fail like an unreachable host
    Offline,
    /// Fail with an HTTP status and raw body
    Http(u16, String),
}

pub struct ScriptedBackend {
    outcome: Mutex<Outcome>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: serde::de::DeserializeOwned>(&self, call: &str, token: Option<&str>) -> Result<T, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} token={}", call, token.unwrap_or("-")));

        match self.outcome.lock().unwrap().clone() {
            Outcome::Data(data) => {
                let body = serde_json::json!({
                    "response_code": 200,
                    "response_message": "success",
                    "response_data": data,
                });
                super::types::decode_envelope(200, &body.to_string())
            }
            Outcome::Offline => Err(RemoteError::Status(503)),
            Outcome::Http(status, body) => super::types::decode_envelope(status, &body),
        }
    }
}

#[async_trait]
impl RemoteBackend for ScriptedBackend {
    async fn login(&self, _email: &str, _password: &str) -> Result<Session, RemoteError> {
        self.respond("login", None)
    }

    async fn list_blogs(&self, token: &str) -> Result<Vec<RemoteBlog>, RemoteError> {
        self.respond("list_blogs", Some(token))
    }

    async fn create_blog(&self, token: &str, _upload: &BlogUpload) -> Result<RemoteBlog, RemoteError> {
        self.respond("create_blog", Some(token))
    }

    async fn list_testimonials(&self, token: Option<&str>) -> Result<Vec<RemoteTestimonial>, RemoteError> {
        self.respond("list_testimonials", token)
    }

    async fn create_testimonial(
        &self,
        token: Option<&str>,
        _upload: &TestimonialUpload,
    ) -> Result<RemoteTestimonial, RemoteError> {
        self.respond("create_testimonial", token)
    }

    fn backend_name(&self) -> &'static str {
        "scripted"
    }
}
