//! Gemini backend - HTTP client for the hosted generateContent endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{AdvisoryBackend, AdvisoryError};
use crate::config::defaults::ADVISORY_API_BASE_URL;
use crate::config::AdvisoryConfig;

// ============================================================================
// Wire Types (generateContent)
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
    }
}

// ============================================================================
// Backend
// ============================================================================

/// HTTP backend for the hosted Gemini text-generation service.
///
/// One POST per request, no retry, no backoff; the only timeout is the one
/// carried by the HTTP client itself.
pub struct GeminiBackend {
    http: reqwest::Client,
    base_url: String,
    config: AdvisoryConfig,
}

impl GeminiBackend {
    /// Create a backend from configuration.
    ///
    /// A missing API key is accepted here - each call fails with
    /// `MissingApiKey` instead, so the rest of the dashboard keeps working.
    pub fn new(config: AdvisoryConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: ADVISORY_API_BASE_URL.to_string(),
            config,
        }
    }

    /// Override the service base URL (tests, proxies)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl AdvisoryBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdvisoryError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.config.model
        );

        let resp = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = %status, model = %self.config.model, "Advisory service error");
            return Err(AdvisoryError::ServiceStatus(status));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        parsed.text().ok_or(AdvisoryError::EmptyResponse)
    }

    fn backend_name(&self) -> &'static str {
        "gemini"
    }
}
