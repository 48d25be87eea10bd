//! Water-quality bands and feeding-table constants

/// Cautionary band for dashboard status classification.
///
/// A reading inside this band is shown as "safe"; outside it the dashboard
/// flags the parameter. These bounds are deliberately narrower than the
/// emergency band used by the advisory prompt - the dashboard warns early,
/// the advisory escalates late. The two bands are separate policy tiers and
/// must not be unified.
pub mod water_safe_band {
    /// Minimum safe pH (inclusive)
    pub const PH_MIN: f64 = 6.5;
    /// Maximum safe pH (inclusive)
    pub const PH_MAX: f64 = 8.5;
    /// Minimum safe temperature (°C, inclusive)
    pub const TEMPERATURE_MIN_C: f64 = 24.0;
    /// Maximum safe temperature (°C, inclusive)
    pub const TEMPERATURE_MAX_C: f64 = 30.0;
    /// Minimum safe dissolved oxygen (mg/L, inclusive)
    pub const OXYGEN_MIN_MG_L: f64 = 3.0;
    /// Maximum safe ammonia (mg/L, inclusive)
    pub const AMMONIA_MAX_MG_L: f64 = 0.05;
}

/// Emergency band quoted to the advisory model.
///
/// When a reading crosses these bounds the advisory system prompt instructs
/// the model to issue urgent alerts and immediate remediation steps.
pub mod water_emergency_band {
    /// pH below this is an emergency
    pub const PH_MIN: f64 = 6.0;
    /// pH above this is an emergency
    pub const PH_MAX: f64 = 9.0;
    /// Dissolved oxygen below this is an emergency (mg/L)
    pub const OXYGEN_MIN_MG_L: f64 = 3.0;
    /// Ammonia above this is an emergency (mg/L)
    pub const AMMONIA_MAX_MG_L: f64 = 0.05;
}

/// Weight-banded daily feeding table.
///
/// Ration = biomass × percentage, where the percentage is selected by
/// average individual weight. Band edges use strict `>` comparisons: a batch
/// at exactly 50 g feeds at the fry rate, exactly 250 g at the juvenile
/// rate. This is a real husbandry policy rule, preserved verbatim.
pub mod feeding_table {
    /// Upper weight bound of the fry band (g)
    pub const FRY_MAX_WEIGHT_G: f64 = 50.0;
    /// Upper weight bound of the juvenile band (g)
    pub const JUVENILE_MAX_WEIGHT_G: f64 = 250.0;
    /// Daily ration as a fraction of biomass, fry band (≤ 50 g)
    pub const FRY_RATION_PCT: f64 = 0.05;
    /// Daily ration fraction, juvenile band (50 g, 250 g]
    pub const JUVENILE_RATION_PCT: f64 = 0.03;
    /// Daily ration fraction, grow-out band (> 250 g)
    pub const GROW_OUT_RATION_PCT: f64 = 0.015;
}
