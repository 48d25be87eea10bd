//! Financial types: Expense, ExpenseCategory

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of operating-expense categories.
///
/// Declaration order is the display order used by the expense breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Feed,
    Energy,
    Labor,
    Fry,
    Maintenance,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Feed,
        ExpenseCategory::Energy,
        ExpenseCategory::Labor,
        ExpenseCategory::Fry,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Other,
    ];

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ExpenseCategory::Feed => "Feed",
            ExpenseCategory::Energy => "Energy",
            ExpenseCategory::Labor => "Labor",
            ExpenseCategory::Fry => "Fry / Fingerlings",
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Parse from string (for API/config)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "feed" => Some(ExpenseCategory::Feed),
            "energy" => Some(ExpenseCategory::Energy),
            "labor" | "labour" => Some(ExpenseCategory::Labor),
            "fry" | "fingerlings" | "seed" => Some(ExpenseCategory::Fry),
            "maintenance" => Some(ExpenseCategory::Maintenance),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single operating-expense transaction.
///
/// Immutable once created; deletable by id. `amount` is currency-agnostic
/// and treated as a positive cost (sign is not enforced).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: u64,
    /// Expense category
    pub category: ExpenseCategory,
    /// Transaction amount (currency-agnostic)
    pub amount: f64,
    /// Transaction date
    pub date: NaiveDate,
    /// Free-text description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_accepts_aliases() {
        assert_eq!(ExpenseCategory::from_str("feed"), Some(ExpenseCategory::Feed));
        assert_eq!(ExpenseCategory::from_str("Feed"), Some(ExpenseCategory::Feed));
        assert_eq!(ExpenseCategory::from_str("labour"), Some(ExpenseCategory::Labor));
        assert_eq!(
            ExpenseCategory::from_str("fingerlings"),
            Some(ExpenseCategory::Fry)
        );
        assert_eq!(ExpenseCategory::from_str("diesel"), None);
    }
}
