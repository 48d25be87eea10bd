//! Biomass and daily feed ration calculations

use crate::types::{feeding_table, Batch};

/// Standing biomass of a batch (kg).
///
/// `current_quantity × average_weight_g / 1000`. A zero count or zero weight
/// yields 0.0 - never an error.
pub fn biomass_kg(batch: &Batch) -> f64 {
    (batch.current_quantity as f64 * batch.average_weight_g) / 1000.0
}

/// Daily ration as a fraction of biomass for a given average weight (g).
///
/// Band edges are strict `>` comparisons: exactly 50 g stays in the fry
/// band, exactly 250 g stays in the juvenile band.
pub fn feed_percentage(average_weight_g: f64) -> f64 {
    if average_weight_g > feeding_table::JUVENILE_MAX_WEIGHT_G {
        feeding_table::GROW_OUT_RATION_PCT
    } else if average_weight_g > feeding_table::FRY_MAX_WEIGHT_G {
        feeding_table::JUVENILE_RATION_PCT
    } else {
        feeding_table::FRY_RATION_PCT
    }
}

/// Recommended daily feed for a batch (kg).
///
/// Biomass × weight-banded ration percentage.
pub fn daily_feed_ration_kg(batch: &Batch) -> f64 {
    biomass_kg(batch) * feed_percentage(batch.average_weight_g)
}
