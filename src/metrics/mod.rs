//! Metrics Engine
//!
//! Deterministic calculations over domain records. All math here is pure
//! arithmetic over validated inputs - no I/O, no state, no failure modes.
//!
//! ## Per-batch functions
//! - `biomass_kg()` - standing biomass from count × average weight
//! - `feed_percentage()` / `daily_feed_ration_kg()` - weight-banded ration
//!
//! ## Fleet reductions
//! - `total_population()` / `total_biomass_kg()` / `active_tank_count()`
//!
//! ## Classification & aggregation
//! - `parameter_status()` - cautionary-band safety check per water parameter
//! - `expense_summary()` - totals, per-category breakdown, feed share
//!
//! Callers are expected to pass finite numbers; malformed form input is
//! rejected upstream, before it reaches this engine.

pub mod feeding;
pub mod finance;
pub mod water;

pub use feeding::{biomass_kg, daily_feed_ration_kg, feed_percentage};
pub use finance::{expense_summary, CategoryTotal, ExpenseSummary};
pub use water::{log_status, parameter_status, ParameterReading};

use std::collections::HashSet;

use crate::types::Batch;

// ============================================================================
// Fleet-Level Reductions
// ============================================================================

/// Total fish count across all batches
pub fn total_population(batches: &[Batch]) -> u64 {
    batches.iter().map(|b| b.current_quantity as u64).sum()
}

/// Total standing biomass across all batches (kg)
pub fn total_biomass_kg(batches: &[Batch]) -> f64 {
    batches.iter().map(biomass_kg).sum()
}

/// Number of distinct tanks among the given batches.
///
/// Cardinality of the `tank_id` set - there is no separate tank registry.
pub fn active_tank_count(batches: &[Batch]) -> usize {
    batches
        .iter()
        .map(|b| b.tank_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

// ============================================================================
// Display Rounding
// ============================================================================

/// Round to 2 decimal places (per-batch card figures)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (headline dashboard totals)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FishStage;
    use chrono::NaiveDate;

    fn batch(tank: &str, quantity: u32, weight_g: f64) -> Batch {
        Batch {
            id: 1,
            name: "Test".to_string(),
            tank_id: tank.to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            initial_quantity: quantity,
            current_quantity: quantity,
            average_weight_g: weight_g,
            stage: FishStage::Juvenile,
        }
    }

    #[test]
    fn test_fleet_reductions() {
        let batches = vec![
            batch("Tank 1", 1950, 150.0),
            batch("Tank 2", 4800, 15.0),
            batch("Tank 1", 100, 400.0),
        ];

        assert_eq!(total_population(&batches), 6850);
        // 292.5 + 72.0 + 40.0
        assert!((total_biomass_kg(&batches) - 404.5).abs() < 1e-9);
        assert_eq!(active_tank_count(&batches), 2);
    }

    #[test]
    fn test_empty_fleet() {
        assert_eq!(total_population(&[]), 0);
        assert_eq!(total_biomass_kg(&[]), 0.0);
        assert_eq!(active_tank_count(&[]), 0);
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(round2(8.7749), 8.77);
        assert_eq!(round1(292.54), 292.5);
    }
}
