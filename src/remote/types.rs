use super::error::{mentions_token_problem, RemoteError};
use crate::models::{Blog, RecordMeta, Testimonial};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response wrapper used by every backend endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub response_code: Value,
    #[serde(default)]
    pub response_data: Value,
    #[serde(default)]
    pub response_message: Option<String>,
}

impl Envelope {
    /// The backend sends the code as a number or a numeric string
    pub fn code(&self) -> Option<i64> {
        match &self.response_code {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        self.response_message.as_deref().unwrap_or("")
    }
}

/// Decode an HTTP response body into `T`, classifying failures.
///
/// Auth failures are HTTP 401/403, envelope codes 401/403, or a non-200
/// envelope whose message is about a missing or invalid token. Everything
/// else that is not a `200` envelope is a non-auth failure.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RemoteError> {
    let envelope: Option<Envelope> = serde_json::from_str(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.message().to_string())
        .unwrap_or_default();

    if status == 401 || status == 403 {
        let reason = if message.is_empty() {
            format!("HTTP {}", status)
        } else {
            message
        };
        return Err(RemoteError::Unauthorized(reason));
    }

    let Some(envelope) = envelope else {
        if (200..300).contains(&status) {
            return Err(RemoteError::Decode("response is not an envelope".to_string()));
        }
        return Err(RemoteError::Status(status));
    };

    let code = envelope.code();
    let token_complaint = code != Some(200) && mentions_token_problem(envelope.message());
    if matches!(code, Some(401) | Some(403)) || token_complaint {
        return Err(RemoteError::Unauthorized(envelope.message().to_string()));
    }

    if !(200..300).contains(&status) {
        return Err(RemoteError::Status(status));
    }

    match code {
        Some(200) => serde_json::from_value(envelope.response_data)
            .map_err(|e| RemoteError::Decode(e.to_string())),
        Some(code) => Err(RemoteError::Envelope {
            code,
            message: envelope.message().to_string(),
        }),
        None => Err(RemoteError::Decode("missing response_code".to_string())),
    }
}

/// List payloads arrive either as a bare array or wrapped in an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "blogs", alias = "testimonials", alias = "list", alias = "items")]
        data: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) | ListPayload::Wrapped { data: items } => items,
        }
    }
}

/// Identity as sent by the backend: `_id` or `id`, string or number
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireId {
    #[serde(rename = "_id", default)]
    legacy: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

impl WireId {
    pub fn resolve(&self) -> String {
        self.id
            .as_ref()
            .or(self.legacy.as_ref())
            .map(value_to_string)
            .unwrap_or_default()
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Tags travel as a comma-joined string; accept arrays and bare numbers too
pub fn parse_tags(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        Value::Number(n) => vec![n.to_string()],
        _ => Vec::new(),
    };
    raw.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn wire_meta(id: &WireId, created: Option<&str>, updated: Option<&str>) -> RecordMeta {
    let created_at = parse_timestamp(created).unwrap_or_else(Utc::now);
    RecordMeta {
        id: id.resolve(),
        created_at,
        updated_at: parse_timestamp(updated).unwrap_or(created_at),
    }
}

/// Blog as returned by `/api/blog/*`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteBlog {
    #[serde(flatten)]
    pub id: WireId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub tags: Value,
    pub image_url: Option<String>,
    pub published: Option<bool>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<RemoteBlog> for Blog {
    fn from(remote: RemoteBlog) -> Self {
        Blog {
            meta: wire_meta(
                &remote.id,
                remote.created_at.as_deref(),
                remote.updated_at.as_deref(),
            ),
            title: remote.title.unwrap_or_default(),
            content: remote.content.unwrap_or_default(),
            category: remote.category.unwrap_or_default(),
            author: remote.author.unwrap_or_default(),
            tags: parse_tags(&remote.tags),
            image_url: remote.image_url,
            published: remote.published.unwrap_or(true),
        }
        .normalized()
    }
}

/// Testimonial as returned by `/api/testimonial/*`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteTestimonial {
    #[serde(flatten)]
    pub id: WireId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
    pub designation: Option<String>,
    #[serde(alias = "image_url")]
    pub image: Option<String>,
    pub rating: Option<u8>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<RemoteTestimonial> for Testimonial {
    fn from(remote: RemoteTestimonial) -> Self {
        Testimonial {
            meta: wire_meta(
                &remote.id,
                remote.created_at.as_deref(),
                remote.updated_at.as_deref(),
            ),
            name: remote.name.unwrap_or_default(),
            email: remote.email.unwrap_or_default(),
            comments: remote.comments.unwrap_or_default(),
            designation: remote.designation.unwrap_or_default(),
            image: remote.image,
            rating: remote.rating,
            // Published by the backend, so already moderated
            approved: true,
        }
    }
}

/// Binary attachment for multipart uploads
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct BlogUpload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialUpload {
    pub name: String,
    pub email: String,
    pub comments: String,
    pub designation: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email_address: &'a str,
    pub password: &'a str,
}

/// Profile of the signed-in back-office user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub role: String,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default, alias = "user_data")]
    pub user: UserProfile,
}
