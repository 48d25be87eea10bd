//! Expense aggregation: totals, category breakdown, feed share

use serde::{Deserialize, Serialize};

use crate::types::{Expense, ExpenseCategory};

/// One surfaced category subtotal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Aggregated view over a set of expenses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of all expense amounts
    pub total: f64,
    /// Per-category subtotals, in category display order.
    /// Categories with a zero subtotal are not surfaced.
    pub by_category: Vec<CategoryTotal>,
    /// Feed spend as a percentage of the total (0.0 when total is 0)
    pub feed_percentage: f64,
}

/// Aggregate a set of expenses.
///
/// Total function: an empty slice yields a zero total, an empty breakdown
/// and a 0.0 feed percentage - never a division fault.
pub fn expense_summary(expenses: &[Expense]) -> ExpenseSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    let by_category: Vec<CategoryTotal> = ExpenseCategory::ALL
        .iter()
        .filter_map(|&category| {
            let subtotal: f64 = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (subtotal != 0.0).then_some(CategoryTotal {
                category,
                total: subtotal,
            })
        })
        .collect();

    let feed_total = by_category
        .iter()
        .find(|c| c.category == ExpenseCategory::Feed)
        .map(|c| c.total)
        .unwrap_or(0.0);

    let feed_percentage = if total > 0.0 {
        (feed_total / total) * 100.0
    } else {
        0.0
    };

    ExpenseSummary {
        total,
        by_category,
        feed_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: ExpenseCategory, amount: f64) -> Expense {
        Expense {
            id: 1,
            category,
            amount,
            date: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_empty_expenses_never_divide() {
        let summary = expense_summary(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.feed_percentage, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_breakdown_surfaces_only_nonzero() {
        let expenses = vec![
            expense(ExpenseCategory::Feed, 600.0),
            expense(ExpenseCategory::Feed, 150.0),
            expense(ExpenseCategory::Energy, 250.0),
        ];

        let summary = expense_summary(&expenses);
        assert_eq!(summary.total, 1000.0);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, ExpenseCategory::Feed);
        assert_eq!(summary.by_category[0].total, 750.0);
        assert_eq!(summary.by_category[1].category, ExpenseCategory::Energy);
        assert_eq!(summary.by_category[1].total, 250.0);
    }

    #[test]
    fn test_feed_percentage_of_total() {
        let expenses = vec![
            expense(ExpenseCategory::Feed, 750.0),
            expense(ExpenseCategory::Labor, 250.0),
        ];

        let summary = expense_summary(&expenses);
        assert!((summary.feed_percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_feed_expenses() {
        let expenses = vec![expense(ExpenseCategory::Maintenance, 120.0)];
        let summary = expense_summary(&expenses);
        assert_eq!(summary.feed_percentage, 0.0);
        assert_eq!(summary.total, 120.0);
    }
}
