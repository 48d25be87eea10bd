//! Advisory Module
//!
//! Best-effort bridge to a hosted text-generation service for husbandry
//! advice. Two operations:
//!
//! - **Chat advice**: free-text question plus a bounded snapshot of farm
//!   state, answered by a tilapia domain-expert persona.
//! - **Water-health analysis**: single water log, short diagnosis and
//!   recommendation.
//!
//! Failures are typed (`AdvisoryError`) so callers can tell a missing
//! credential from a transport failure; the `_or_fallback` wrappers give
//! the chat surface a best-effort contract by collapsing any error into a
//! fixed user-facing string. Advisory text is opaque and untrusted - nothing here
//! parses or acts on it.

mod client;
pub mod prompts;

pub use client::GeminiBackend;

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::context::AdvisorySnapshot;
use crate::types::WaterQualityLog;

/// Fixed user-facing text when chat advice cannot be produced
pub const ADVISORY_FALLBACK: &str =
    "Advisory service unreachable. Check your connection or API key.";

/// Fixed user-facing text when water analysis cannot be produced
pub const WATER_ANALYSIS_FALLBACK: &str = "Water analysis unavailable.";

/// Advisory boundary errors
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("No API key configured")]
    MissingApiKey,
    #[error("An advisory request is already in flight")]
    RequestInFlight,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Service returned status {0}")]
    ServiceStatus(reqwest::StatusCode),
    #[error("Service returned no text")]
    EmptyResponse,
}

/// Text-generation backend seam.
///
/// Production uses `GeminiBackend`; tests substitute stub backends to
/// exercise the failure contract without a network.
#[async_trait]
pub trait AdvisoryBackend: Send + Sync {
    /// Generate a response for a fully composed prompt
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Advisory client: prompt composition plus a single-in-flight guard.
///
/// The guard rejects a second request while one is outstanding rather than
/// letting completions interleave in the transcript out of order. The UI
/// disables the send control anyway; the guard enforces it in the core.
pub struct AdvisoryClient {
    backend: Box<dyn AdvisoryBackend>,
    in_flight: AtomicBool,
}

impl AdvisoryClient {
    pub fn new(backend: Box<dyn AdvisoryBackend>) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Ask the domain-expert persona a question, optionally with a snapshot
    /// of current farm state.
    pub async fn advise(
        &self,
        query: &str,
        context: Option<&AdvisorySnapshot>,
    ) -> Result<String, AdvisoryError> {
        let _guard = self.begin_request()?;
        let prompt = prompts::compose_advice_prompt(query, context);

        tracing::debug!(
            backend = self.backend.backend_name(),
            prompt_length = prompt.len(),
            has_context = context.is_some(),
            "Sending advisory query"
        );

        let text = self.backend.generate(&prompt).await?;
        tracing::debug!(response_length = text.len(), "Advisory response received");
        Ok(text)
    }

    /// Short diagnosis and recommendation for a single water sample.
    pub async fn analyze_water_health(
        &self,
        log: &WaterQualityLog,
    ) -> Result<String, AdvisoryError> {
        let _guard = self.begin_request()?;
        let prompt = prompts::water_analysis_prompt(log);

        tracing::debug!(
            backend = self.backend.backend_name(),
            tank_id = %log.tank_id,
            "Requesting water-health analysis"
        );

        self.backend.generate(&prompt).await
    }

    /// `advise`, collapsing any failure into the fixed fallback string.
    ///
    /// Never propagates an error; the chat surface is best-effort and a
    /// failed request is just another transcript turn.
    pub async fn advise_or_fallback(
        &self,
        query: &str,
        context: Option<&AdvisorySnapshot>,
    ) -> String {
        match self.advise(query, context).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Advisory query failed, returning fallback");
                ADVISORY_FALLBACK.to_string()
            }
        }
    }

    /// `analyze_water_health`, collapsing any failure into the fixed
    /// fallback string.
    pub async fn analyze_or_fallback(&self, log: &WaterQualityLog) -> String {
        match self.analyze_water_health(log).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Water analysis failed, returning fallback");
                WATER_ANALYSIS_FALLBACK.to_string()
            }
        }
    }

    /// Claim the in-flight slot, or reject if a request is outstanding
    fn begin_request(&self) -> Result<InFlightGuard<'_>, AdvisoryError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AdvisoryError::RequestInFlight);
        }
        Ok(InFlightGuard { flag: &self.in_flight })
    }
}

/// Releases the in-flight slot on drop, including on error paths
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
