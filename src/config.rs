use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one JSON file per collection
    pub data_dir: PathBuf,
    /// Base URL of the blog/testimonial backend; remote calls are skipped when unset
    pub api_base_url: Option<String>,
    /// Artificial delay applied to every local operation
    pub latency_ms: u64,
    /// Timeout for backend HTTP calls
    pub http_timeout_secs: u64,
    /// Back-office credentials checked by `admin_login`
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            api_base_url: None,
            latency_ms: 50,
            http_timeout_secs: 30,
            admin_email: "admin@brokerage.local".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load from `BROKERAGE_*` environment variables, defaulting the rest
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = get("BROKERAGE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = get("BROKERAGE_API_URL") {
            config.api_base_url = Some(url);
        }
        if let Some(ms) = get("BROKERAGE_LATENCY_MS") {
            config.latency_ms = ms
                .trim()
                .parse()
                .with_context(|| format!("BROKERAGE_LATENCY_MS is not a number: {:?}", ms))?;
        }
        if let Some(secs) = get("BROKERAGE_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs = secs.trim().parse().with_context(|| {
                format!("BROKERAGE_HTTP_TIMEOUT_SECS is not a number: {:?}", secs)
            })?;
        }
        if let Some(email) = get("BROKERAGE_ADMIN_EMAIL") {
            config.admin_email = email;
        }
        if let Some(password) = get("BROKERAGE_ADMIN_PASSWORD") {
            config.admin_password = password;
        }

        Ok(config)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
