//! Farm application state
//!
//! Owns the four in-memory entity collections. All mutation funnels through
//! named operations so a persistence layer can hook in later; collections
//! are never replaced wholesale. Everything is insertion-ordered: "most
//! recent" always means last appended.
//!
//! Single logical thread of control - no interior locking. The UI event
//! loop is the only writer.

use chrono::NaiveDate;

use crate::types::{
    Batch, ChatMessage, ChatRole, Expense, ExpenseCategory, FishStage, NewBatch, WaterQualityLog,
};

/// In-memory session state for a single farm.
#[derive(Debug, Default)]
pub struct FarmState {
    batches: Vec<Batch>,
    water_logs: Vec<WaterQualityLog>,
    expenses: Vec<Expense>,
    transcript: Vec<ChatMessage>,
    next_id: u64,
}

impl FarmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next entity id (monotonic, session-scoped)
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ========================================================================
    // Batches
    // ========================================================================

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Stock a new batch. `current_quantity` starts equal to the initial
    /// quantity; mortality updates come later through separate events.
    pub fn add_batch(&mut self, new: NewBatch) -> &Batch {
        let id = self.allocate_id();
        let batch = Batch {
            id,
            name: new.name,
            tank_id: new.tank_id,
            start_date: new.start_date,
            initial_quantity: new.initial_quantity,
            current_quantity: new.initial_quantity,
            average_weight_g: new.average_weight_g,
            stage: new.stage,
        };

        tracing::info!(
            batch_id = id,
            tank_id = %batch.tank_id,
            quantity = batch.initial_quantity,
            stage = %batch.stage.short_code(),
            "Batch stocked"
        );

        self.batches.push(batch);
        self.batches.last().expect("batch just pushed")
    }

    /// Delete a batch by id. Returns true if a batch was removed.
    pub fn delete_batch(&mut self, id: u64) -> bool {
        let before = self.batches.len();
        self.batches.retain(|b| b.id != id);
        let removed = self.batches.len() != before;
        if removed {
            tracing::info!(batch_id = id, "Batch deleted");
        } else {
            tracing::warn!(batch_id = id, "Delete requested for unknown batch");
        }
        removed
    }

    // ========================================================================
    // Water Logs (append-only)
    // ========================================================================

    pub fn water_logs(&self) -> &[WaterQualityLog] {
        &self.water_logs
    }

    /// Append a water sample. Logs are immutable once recorded.
    #[allow(clippy::too_many_arguments)]
    pub fn add_water_log(
        &mut self,
        date: NaiveDate,
        tank_id: &str,
        ph: f64,
        temperature_c: f64,
        oxygen_mg_l: f64,
        ammonia_mg_l: f64,
        notes: Option<String>,
    ) -> &WaterQualityLog {
        let id = self.allocate_id();
        let log = WaterQualityLog {
            id,
            date,
            tank_id: tank_id.to_string(),
            ph,
            temperature_c,
            oxygen_mg_l,
            ammonia_mg_l,
            notes,
        };

        tracing::debug!(
            log_id = id,
            tank_id = %log.tank_id,
            ph = log.ph,
            temperature_c = log.temperature_c,
            oxygen_mg_l = log.oxygen_mg_l,
            ammonia_mg_l = log.ammonia_mg_l,
            "Water sample recorded"
        );

        self.water_logs.push(log);
        self.water_logs.last().expect("log just pushed")
    }

    // ========================================================================
    // Expenses
    // ========================================================================

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record an expense transaction
    pub fn add_expense(
        &mut self,
        category: ExpenseCategory,
        amount: f64,
        date: NaiveDate,
        description: &str,
    ) -> &Expense {
        let id = self.allocate_id();
        let expense = Expense {
            id,
            category,
            amount,
            date,
            description: description.to_string(),
        };

        tracing::debug!(
            expense_id = id,
            category = %expense.category,
            amount = expense.amount,
            "Expense recorded"
        );

        self.expenses.push(expense);
        self.expenses.last().expect("expense just pushed")
    }

    /// Delete an expense by id. Returns true if one was removed.
    pub fn delete_expense(&mut self, id: u64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    // ========================================================================
    // Chat Transcript (append-only)
    // ========================================================================

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Append an operator turn to the transcript
    pub fn append_user_message(&mut self, text: &str) -> &ChatMessage {
        self.append_message(ChatRole::User, text, false)
    }

    /// Append an advisory turn; `is_error` marks fallback text
    pub fn append_advisor_message(&mut self, text: &str, is_error: bool) -> &ChatMessage {
        self.append_message(ChatRole::Advisor, text, is_error)
    }

    fn append_message(&mut self, role: ChatRole, text: &str, is_error: bool) -> &ChatMessage {
        let id = self.allocate_id();
        self.transcript.push(ChatMessage {
            id,
            role,
            text: text.to_string(),
            is_error,
        });
        self.transcript.last().expect("message just pushed")
    }

    // ========================================================================
    // Demo Seed Data
    // ========================================================================

    /// A farm seeded with the standard demo cohorts and water history.
    ///
    /// Two batches (juvenile 1950 × 150 g, fry 4800 × 15 g) and four clean
    /// Tank 1 samples. Used by the demo binary and regression tests.
    pub fn demo() -> Self {
        let mut state = Self::new();

        state.add_batch(NewBatch {
            name: "Batch Alpha-1".to_string(),
            tank_id: "Tank 1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
            initial_quantity: 2000,
            average_weight_g: 150.0,
            stage: FishStage::Juvenile,
        });
        // Demo cohort carries some mortality since stocking
        if let Some(batch) = state.batches.last_mut() {
            batch.current_quantity = 1950;
        }

        state.add_batch(NewBatch {
            name: "Batch Beta-2".to_string(),
            tank_id: "Tank 2".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 11, 15).expect("valid date"),
            initial_quantity: 5000,
            average_weight_g: 15.0,
            stage: FishStage::FryRearing,
        });
        if let Some(batch) = state.batches.last_mut() {
            batch.current_quantity = 4800;
        }

        let samples = [
            (20, 7.2, 26.5, 5.5, 0.01),
            (21, 7.1, 26.0, 5.2, 0.02),
            (22, 6.9, 25.8, 4.8, 0.03),
            (23, 7.0, 26.2, 5.0, 0.01),
        ];
        for (day, ph, temp, oxygen, ammonia) in samples {
            let date = NaiveDate::from_ymd_opt(2023, 10, day).expect("valid date");
            state.add_water_log(date, "Tank 1", ph, temp, oxygen, ammonia, None);
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_lifecycle() {
        let mut state = FarmState::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        let id = state.add_batch(NewBatch::with_defaults("Lot A", "Tank 3", date)).id;
        assert_eq!(state.batches().len(), 1);

        let batch = &state.batches()[0];
        // Stocking defaults: 1000 fish at 5 g, fry stage
        assert_eq!(batch.initial_quantity, 1000);
        assert_eq!(batch.current_quantity, 1000);
        assert_eq!(batch.average_weight_g, 5.0);
        assert_eq!(batch.stage, FishStage::FryRearing);

        assert!(state.delete_batch(id));
        assert!(!state.delete_batch(id));
        assert!(state.batches().is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_entity_kinds() {
        let mut state = FarmState::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        let batch_id = state.add_batch(NewBatch::with_defaults("Lot A", "Tank 1", date)).id;
        let log_id = state
            .add_water_log(date, "Tank 1", 7.0, 26.0, 5.0, 0.01, None)
            .id;
        let expense_id = state
            .add_expense(ExpenseCategory::Feed, 100.0, date, "pellets")
            .id;

        assert_ne!(batch_id, log_id);
        assert_ne!(log_id, expense_id);
    }

    #[test]
    fn test_expense_delete_by_id() {
        let mut state = FarmState::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        let id = state
            .add_expense(ExpenseCategory::Energy, 55.0, date, "aerator power")
            .id;
        let keep = state
            .add_expense(ExpenseCategory::Labor, 200.0, date, "night shift")
            .id;

        assert!(state.delete_expense(id));
        assert_eq!(state.expenses().len(), 1);
        assert_eq!(state.expenses()[0].id, keep);
    }

    #[test]
    fn test_transcript_appends_in_order() {
        let mut state = FarmState::new();
        state.append_user_message("How much feed today?");
        state.append_advisor_message("About 8.8 kg for Tank 1.", false);
        state.append_advisor_message("Advisory unavailable.", true);

        let transcript = state.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].role, ChatRole::User);
        assert_eq!(transcript[1].role, ChatRole::Advisor);
        assert!(!transcript[1].is_error);
        assert!(transcript[2].is_error);
    }

    #[test]
    fn test_demo_seed_shape() {
        let state = FarmState::demo();
        assert_eq!(state.batches().len(), 2);
        assert_eq!(state.water_logs().len(), 4);
        assert_eq!(state.batches()[0].current_quantity, 1950);
        assert_eq!(state.batches()[1].current_quantity, 4800);
    }
}
