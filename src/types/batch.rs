//! Production batch types: Batch, FishStage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Growth Stage
// ============================================================================

/// Growth stage of a tilapia cohort
///
/// Stages are assigned by the operator at stocking and advanced manually;
/// there is no automatic transition between stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum FishStage {
    /// Fry rearing - post-hatchery, typically < 50 g
    #[default]
    FryRearing,
    /// Juvenile - intermediate growth, typically 50-250 g
    Juvenile,
    /// Grow-out - final fattening toward market weight
    GrowOut,
    /// Harvest - ready for market
    Harvest,
}

impl FishStage {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FishStage::FryRearing => "Fry Rearing",
            FishStage::Juvenile => "Juvenile",
            FishStage::GrowOut => "Grow-Out",
            FishStage::Harvest => "Harvest",
        }
    }

    /// Get short code for logging
    pub fn short_code(&self) -> &'static str {
        match self {
            FishStage::FryRearing => "FRY",
            FishStage::Juvenile => "JUV",
            FishStage::GrowOut => "GROW",
            FishStage::Harvest => "HARV",
        }
    }
}

impl std::fmt::Display for FishStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Batch
// ============================================================================

/// A cohort of fish sharing a tank and stocking date.
///
/// `tank_id` is a free-text grouping key, not a foreign key into a tank
/// registry - batch/water-log association is a soft string match.
/// Only `current_quantity` and `average_weight_g` change after creation
/// (mortality and growth updates); everything else is fixed at stocking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    /// Unique identifier, assigned at creation
    pub id: u64,
    /// Operator-facing batch name
    pub name: String,
    /// Tank grouping key (soft match against water logs)
    pub tank_id: String,
    /// Stocking date
    pub start_date: NaiveDate,
    /// Fish count at stocking (immutable after creation)
    pub initial_quantity: u32,
    /// Current fish count (initial minus mortality, by convention)
    pub current_quantity: u32,
    /// Average individual weight (grams)
    pub average_weight_g: f64,
    /// Current growth stage
    pub stage: FishStage,
}

/// Operator input for stocking a new batch.
///
/// Fields left at their defaults match the stocking form presets:
/// 1000 fish at 5 g, fry-rearing stage.
#[derive(Debug, Clone)]
pub struct NewBatch {
    pub name: String,
    pub tank_id: String,
    pub start_date: NaiveDate,
    pub initial_quantity: u32,
    pub average_weight_g: f64,
    pub stage: FishStage,
}

impl NewBatch {
    /// Stocking form defaults for the given name and tank
    pub fn with_defaults(name: &str, tank_id: &str, start_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            tank_id: tank_id.to_string(),
            start_date,
            initial_quantity: 1000,
            average_weight_g: 5.0,
            stage: FishStage::FryRearing,
        }
    }
}
