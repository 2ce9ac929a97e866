use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default request timeout kalau TALENTA_HTTP_TIMEOUT_SECS tidak di-set.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the client, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Talenta REST backend, without trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub http_timeout_secs: u64,
    /// Optional path for the persisted session blob (token + cached user).
    /// When absent the embedding shell must supply its own storage.
    pub session_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_base_url = env::var("TALENTA_API_BASE_URL")
            .context("TALENTA_API_BASE_URL not set")?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let http_timeout_secs = match env::var("TALENTA_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .context("TALENTA_HTTP_TIMEOUT_SECS must be a positive integer")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_file = env::var("TALENTA_SESSION_FILE").ok().map(PathBuf::from);

        Ok(Self {
            api_base_url,
            http_timeout_secs,
            session_file,
        })
    }

    /// Config pointing at an arbitrary base URL, with defaults elsewhere.
    /// Dipakai di test dan embedding yang tidak lewat env.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: None,
        }
    }
}
