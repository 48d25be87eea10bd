//! Runtime configuration
//!
//! The only external dependency is the hosted advisory service, so
//! configuration is a small struct read from the process environment at
//! startup. A missing API key is deliberately not a startup error: every
//! advisory call degrades to the fallback string instead, and the rest of
//! the dashboard keeps working.

pub mod defaults;

use defaults::{
    ADVISORY_HTTP_TIMEOUT_SECS, ADVISORY_TEMPERATURE, API_KEY_ENV, API_KEY_ENV_FALLBACK,
    DEFAULT_ADVISORY_MODEL,
};

/// Advisory service configuration
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    /// Service API key; `None` degrades every call to the fallback string
    pub api_key: Option<String>,
    /// Hosted model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// HTTP timeout (seconds)
    pub http_timeout_secs: u64,
}

impl AdvisoryConfig {
    /// Read configuration from the process environment.
    ///
    /// Checks `GEMINI_API_KEY` first, then the legacy `API_KEY`. Empty
    /// values count as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_ENV_FALLBACK))
            .ok()
            .filter(|k| !k.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!(
                "No advisory API key in environment ({} or {}) - advisory calls will \
                 return the fallback message",
                API_KEY_ENV,
                API_KEY_ENV_FALLBACK
            );
        }

        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Configuration with an explicit key (tests, embedding)
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..Self::default()
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ADVISORY_MODEL.to_string(),
            temperature: ADVISORY_TEMPERATURE,
            http_timeout_secs: ADVISORY_HTTP_TIMEOUT_SECS,
        }
    }
}
