//! Water parameter safety classification (cautionary band)

use crate::types::{water_safe_band, WaterParameter, WaterQualityLog};

/// One classified reading from a water log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterReading {
    pub parameter: WaterParameter,
    pub value: f64,
    pub safe: bool,
}

/// Classify a reading against the cautionary safe band.
///
/// All bounds are inclusive as documented in `water_safe_band`: pH 6.5 and
/// 8.5 are safe, temperature 24 and 30 are safe, oxygen is safe at exactly
/// 3.0, ammonia at exactly 0.05. This is the dashboard tier - the advisory
/// prompt uses the wider emergency band.
pub fn parameter_status(value: f64, parameter: WaterParameter) -> bool {
    match parameter {
        WaterParameter::Ph => {
            value >= water_safe_band::PH_MIN && value <= water_safe_band::PH_MAX
        }
        WaterParameter::Temperature => {
            value >= water_safe_band::TEMPERATURE_MIN_C
                && value <= water_safe_band::TEMPERATURE_MAX_C
        }
        WaterParameter::Oxygen => value >= water_safe_band::OXYGEN_MIN_MG_L,
        WaterParameter::Ammonia => value <= water_safe_band::AMMONIA_MAX_MG_L,
    }
}

/// Classify all four readings of a water log
pub fn log_status(log: &WaterQualityLog) -> [ParameterReading; 4] {
    [
        WaterParameter::Ph,
        WaterParameter::Temperature,
        WaterParameter::Oxygen,
        WaterParameter::Ammonia,
    ]
    .map(|parameter| {
        let value = log.reading(parameter);
        ParameterReading {
            parameter,
            value,
            safe: parameter_status(value, parameter),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_ph_band_inclusive_both_ends() {
        assert!(parameter_status(6.5, WaterParameter::Ph));
        assert!(parameter_status(8.5, WaterParameter::Ph));
        assert!(!parameter_status(6.4999, WaterParameter::Ph));
        assert!(!parameter_status(8.5001, WaterParameter::Ph));
    }

    #[test]
    fn test_temperature_band_inclusive_both_ends() {
        assert!(parameter_status(24.0, WaterParameter::Temperature));
        assert!(parameter_status(30.0, WaterParameter::Temperature));
        assert!(!parameter_status(23.9, WaterParameter::Temperature));
        assert!(!parameter_status(30.1, WaterParameter::Temperature));
    }

    #[test]
    fn test_oxygen_inclusive_floor() {
        assert!(parameter_status(3.0, WaterParameter::Oxygen));
        assert!(parameter_status(5.5, WaterParameter::Oxygen));
        assert!(!parameter_status(2.9999, WaterParameter::Oxygen));
    }

    #[test]
    fn test_ammonia_inclusive_ceiling() {
        assert!(parameter_status(0.05, WaterParameter::Ammonia));
        assert!(parameter_status(0.0, WaterParameter::Ammonia));
        assert!(!parameter_status(0.0501, WaterParameter::Ammonia));
    }

    #[test]
    fn test_log_status_mixed() {
        let log = WaterQualityLog {
            id: 1,
            date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
            tank_id: "Tank 1".to_string(),
            ph: 7.2,
            temperature_c: 31.5,
            oxygen_mg_l: 5.5,
            ammonia_mg_l: 0.01,
            notes: None,
        };

        let status = log_status(&log);
        assert!(status[0].safe, "pH 7.2 should be safe");
        assert!(!status[1].safe, "31.5 °C should be flagged");
        assert!(status[2].safe, "5.5 mg/L oxygen should be safe");
        assert!(status[3].safe, "0.01 mg/L ammonia should be safe");
    }
}
