//! Prompt templates for the advisory service
//!
//! The system instruction carries the emergency-threshold policy - the wide
//! band, not the dashboard's cautionary band. Keep the two tiers distinct:
//! the dashboard flags early, the model is told to escalate only past the
//! emergency bounds.

use crate::context::AdvisorySnapshot;
use crate::types::{water_emergency_band, WaterQualityLog};

/// Transcript opener shown before the first operator question
pub const ADVISOR_GREETING: &str =
    "Hello. I am your tilapia farming expert assistant. How can I help you today? \
     I can analyze your batches and water quality, or help you calculate feed rations.";

/// Domain-expert persona and escalation policy for chat advice
pub fn system_instruction() -> String {
    format!(
        "You are an expert aquaculture engineer specialized in tilapia \
         (Oreochromis niloticus) farming.\n\
         Your goal is to help the user optimize production, diagnose water \
         quality problems, calculate feed rations and improve profitability.\n\
         Answer technically but accessibly. Use metric units.\n\
         If you detect dangerous water parameters (pH < {} or > {}, \
         oxygen < {} mg/L, ammonia > {} mg/L), give urgent alerts and \
         immediate solutions.",
        water_emergency_band::PH_MIN,
        water_emergency_band::PH_MAX,
        water_emergency_band::OXYGEN_MIN_MG_L,
        water_emergency_band::AMMONIA_MAX_MG_L,
    )
}

/// Compose the full chat-advice prompt: persona, optional JSON context,
/// then the operator's question.
///
/// The context block carries the whole serialized snapshot - batches,
/// recent water logs, recent expenses and the financial summary.
pub fn compose_advice_prompt(query: &str, context: Option<&AdvisorySnapshot>) -> String {
    let context_block = match context {
        Some(snapshot) => format!("\n\nCurrent farm context:\n{}\n", snapshot.to_json()),
        None => String::new(),
    };

    format!(
        "{}{}\n\nUser question: {}",
        system_instruction(),
        context_block,
        query
    )
}

/// Single-purpose prompt for water-health analysis of one sample
pub fn water_analysis_prompt(log: &WaterQualityLog) -> String {
    format!(
        "Analyze this water quality log for tilapia:\n\
         pH: {}\n\
         Temperature: {} °C\n\
         Dissolved Oxygen: {} mg/L\n\
         Ammonia: {} mg/L\n\n\
         Provide a brief diagnosis (2 sentences) and a recommendation if \
         something is wrong.",
        log.ph, log.temperature_c, log.oxygen_mg_l, log.ammonia_mg_l
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FarmState;
    use chrono::NaiveDate;

    #[test]
    fn test_system_instruction_quotes_emergency_band() {
        let instruction = system_instruction();
        assert!(instruction.contains("pH < 6 or > 9"));
        assert!(instruction.contains("oxygen < 3 mg/L"));
        assert!(instruction.contains("ammonia > 0.05 mg/L"));
    }

    #[test]
    fn test_advice_prompt_with_context() {
        let snapshot = crate::context::AdvisorySnapshot::capture(&FarmState::demo());
        let prompt = compose_advice_prompt("How much feed for Tank 1?", Some(&snapshot));

        assert!(prompt.contains("Batch Alpha-1"));
        assert!(prompt.ends_with("User question: How much feed for Tank 1?"));
    }

    #[test]
    fn test_advice_prompt_includes_recent_expenses() {
        let mut farm = FarmState::demo();
        farm.add_expense(
            crate::types::ExpenseCategory::Feed,
            620.0,
            NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
            "Grower pellets, 25 bags",
        );

        let snapshot = crate::context::AdvisorySnapshot::capture(&farm);
        let prompt = compose_advice_prompt("Is my feed spend reasonable?", Some(&snapshot));

        assert!(prompt.contains("Grower pellets, 25 bags"));
        assert!(prompt.contains("\"total_expenses\":620.0"));
    }

    #[test]
    fn test_advice_prompt_without_context() {
        let prompt = compose_advice_prompt("What stocking density?", None);
        assert!(!prompt.contains("Current farm context"));
        assert!(prompt.contains("User question: What stocking density?"));
    }

    #[test]
    fn test_water_analysis_prompt_carries_readings() {
        let log = WaterQualityLog {
            id: 1,
            date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
            tank_id: "Tank 1".to_string(),
            ph: 5.5,
            temperature_c: 26.5,
            oxygen_mg_l: 2.1,
            ammonia_mg_l: 0.08,
            notes: None,
        };

        let prompt = water_analysis_prompt(&log);
        assert!(prompt.contains("pH: 5.5"));
        assert!(prompt.contains("Temperature: 26.5 °C"));
        assert!(prompt.contains("Dissolved Oxygen: 2.1 mg/L"));
        assert!(prompt.contains("Ammonia: 0.08 mg/L"));
    }
}
