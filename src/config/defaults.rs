//! System-wide default constants.
//!
//! Centralises tunable values so they are not scattered across the codebase.
//! Grouped by subsystem.

// ============================================================================
// Advisory Context
// ============================================================================

/// Water logs included in an advisory snapshot (most recently appended).
pub const RECENT_WATER_LOGS_IN_CONTEXT: usize = 5;

/// Expenses included in an advisory snapshot (most recently appended).
pub const RECENT_EXPENSES_IN_CONTEXT: usize = 5;

// ============================================================================
// Advisory Client
// ============================================================================

/// Default hosted model identifier.
pub const DEFAULT_ADVISORY_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the hosted text-generation service.
pub const ADVISORY_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling temperature for advisory generation. Low, for steady technical
/// answers rather than creative ones.
pub const ADVISORY_TEMPERATURE: f64 = 0.4;

/// HTTP client timeout for advisory requests (seconds).
pub const ADVISORY_HTTP_TIMEOUT_SECS: u64 = 30;

/// Primary environment variable holding the service API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy environment variable checked when the primary is unset.
pub const API_KEY_ENV_FALLBACK: &str = "API_KEY";
