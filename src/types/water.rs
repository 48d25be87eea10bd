//! Water quality types: WaterQualityLog, WaterParameter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four monitored water parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WaterParameter {
    Ph,
    Temperature,
    Oxygen,
    Ammonia,
}

impl WaterParameter {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WaterParameter::Ph => "pH",
            WaterParameter::Temperature => "Temperature",
            WaterParameter::Oxygen => "Dissolved Oxygen",
            WaterParameter::Ammonia => "Ammonia",
        }
    }

    /// Measurement unit ("" for dimensionless pH)
    pub fn unit(&self) -> &'static str {
        match self {
            WaterParameter::Ph => "",
            WaterParameter::Temperature => "°C",
            WaterParameter::Oxygen => "mg/L",
            WaterParameter::Ammonia => "mg/L",
        }
    }
}

impl std::fmt::Display for WaterParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A point-in-time water sample for one tank.
///
/// Append-only: logs are never updated or deleted. "Most recent" always
/// means last appended - the `date` field is operator-entered and is not
/// used for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterQualityLog {
    /// Unique identifier, assigned at creation
    pub id: u64,
    /// Sample date (operator-entered, informational only)
    pub date: NaiveDate,
    /// Tank grouping key
    pub tank_id: String,
    /// pH (typical range 0-14)
    pub ph: f64,
    /// Water temperature (°C)
    pub temperature_c: f64,
    /// Dissolved oxygen (mg/L)
    pub oxygen_mg_l: f64,
    /// Total ammonia (mg/L)
    pub ammonia_mg_l: f64,
    /// Optional free-text observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WaterQualityLog {
    /// Reading for a given parameter kind
    pub fn reading(&self, parameter: WaterParameter) -> f64 {
        match parameter {
            WaterParameter::Ph => self.ph,
            WaterParameter::Temperature => self.temperature_c,
            WaterParameter::Oxygen => self.oxygen_mg_l,
            WaterParameter::Ammonia => self.ammonia_mg_l,
        }
    }
}
