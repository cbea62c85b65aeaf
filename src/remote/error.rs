use thiserror::Error;

/// Failure of a call to the remote backend
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The session token was missing, invalid or expired
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("backend rejected request ({code}): {message}")]
    Envelope { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Auth failures must reach the caller; everything else may fall back
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, RemoteError::Unauthorized(_))
    }
}

/// Whether a backend message complains about the session token
pub(crate) fn mentions_token_problem(message: &str) -> bool {
    let message = message.to_lowercase();
    if message.contains("unauthorized") || message.contains("unauthorised") {
        return true;
    }
    message.contains("token")
        && ["missing", "invalid", "expired", "required", "not provided", "malformed"]
            .iter()
            .any(|word| message.contains(word))
}
