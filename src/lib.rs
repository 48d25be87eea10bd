//! AquaFarm-OS: Aquaculture Operational Intelligence
//!
//! Core domain model for a single-tenant tilapia farming dashboard:
//! batch tracking, water-quality classification, expense aggregation, and a
//! best-effort bridge to a hosted advisory model.
//!
//! ## Architecture
//!
//! - **Metrics Engine**: pure derived-metric functions (biomass, rations,
//!   parameter bands, expense rollups)
//! - **Context Builder**: bounded snapshot of farm state for the advisory
//!   prompt
//! - **Advisory Client**: prompt composition and hosted-model transport with
//!   typed errors and fixed fallback strings

pub mod advisory;
pub mod config;
pub mod context;
pub mod metrics;
pub mod state;
pub mod types;

// Re-export configuration
pub use config::AdvisoryConfig;

// Re-export commonly used types
pub use types::{
    Batch, ChatMessage, ChatRole, Expense, ExpenseCategory, FishStage, NewBatch, WaterParameter,
    WaterQualityLog,
};

// Re-export state and snapshot
pub use context::{AdvisorySnapshot, FinancialSummary};
pub use state::FarmState;

// Re-export advisory components
pub use advisory::{
    AdvisoryBackend, AdvisoryClient, AdvisoryError, GeminiBackend, ADVISORY_FALLBACK,
    WATER_ANALYSIS_FALLBACK,
};
