//! Advisory Context Builder
//!
//! Assembles a bounded, serializable snapshot of current farm state to
//! accompany an advisory query. The snapshot is an independent copy - the
//! builder never mutates the state it reads - and is capped so the prompt
//! cannot grow without bound as the session accumulates logs.

use serde::{Deserialize, Serialize};

use crate::config::defaults::{RECENT_EXPENSES_IN_CONTEXT, RECENT_WATER_LOGS_IN_CONTEXT};
use crate::metrics;
use crate::state::FarmState;
use crate::types::{Batch, Expense, ExpenseCategory, WaterQualityLog};

/// Financial rollup included in every snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    /// Sum of all recorded expenses
    pub total_expenses: f64,
    /// Sum of feed-category expenses
    pub feed_expenses: f64,
}

/// Bounded snapshot of farm state for the advisory prompt.
///
/// Batch counts are assumed small, so all batches are included. Water logs
/// and expenses are capped to the most recently *appended* entries - append
/// order, not the operator-entered date, defines recency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdvisorySnapshot {
    /// All current batches
    pub batches: Vec<Batch>,
    /// Last-appended water logs (≤ cap), in append order
    pub recent_water_logs: Vec<WaterQualityLog>,
    /// Last-appended expenses (≤ cap), in append order
    pub recent_expenses: Vec<Expense>,
    /// Financial rollup over *all* expenses, not just the recent slice
    pub financial_summary: FinancialSummary,
}

impl AdvisorySnapshot {
    /// Capture a snapshot of the current farm state.
    ///
    /// Total over its inputs: empty collections produce empty slices and a
    /// zero-valued financial summary.
    pub fn capture(state: &FarmState) -> Self {
        let batches = state.batches().to_vec();
        let recent_water_logs = tail_slice(state.water_logs(), RECENT_WATER_LOGS_IN_CONTEXT);
        let recent_expenses = tail_slice(state.expenses(), RECENT_EXPENSES_IN_CONTEXT);

        let summary = metrics::expense_summary(state.expenses());
        let feed_expenses = summary
            .by_category
            .iter()
            .find(|c| c.category == ExpenseCategory::Feed)
            .map(|c| c.total)
            .unwrap_or(0.0);

        let snapshot = Self {
            batches,
            recent_water_logs,
            recent_expenses,
            financial_summary: FinancialSummary {
                total_expenses: summary.total,
                feed_expenses,
            },
        };

        tracing::debug!(
            batches = snapshot.batches.len(),
            water_logs = snapshot.recent_water_logs.len(),
            expenses = snapshot.recent_expenses.len(),
            total_expenses = snapshot.financial_summary.total_expenses,
            "Advisory snapshot captured"
        );

        snapshot
    }

    /// Serialize for prompt embedding
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Snapshot serialization failed");
            "{}".to_string()
        })
    }
}

/// Last `cap` elements of a slice, cloned, preserving order
fn tail_slice<T: Clone>(items: &[T], cap: usize) -> Vec<T> {
    let start = items.len().saturating_sub(cap);
    items[start..].to_vec()
}
