//! Financial input model
//!
//! `FinancialData` is what the expense form produces on a successful submit
//! and what gets sent to the plan generator. `ExpenseItem` is the structured
//! view recovered from its expense string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Budgeting style requested from the plan generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetMode {
    /// Balanced 50/30/20-style plan; the only mode that takes a savings goal
    #[default]
    Standard,
    /// Aggressive cuts to non-essential spending
    Minimalist,
}

impl BudgetMode {
    /// All modes, in selector order
    pub const ALL: [BudgetMode; 2] = [BudgetMode::Standard, BudgetMode::Minimalist];

    /// Whether this mode collects a savings goal
    pub fn takes_savings_goal(self) -> bool {
        matches!(self, Self::Standard)
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Standard => Self::Minimalist,
            Self::Minimalist => Self::Standard,
        }
    }
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Minimalist => write!(f, "Minimalist"),
        }
    }
}

impl FromStr for BudgetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "minimalist" | "minimal" => Ok(Self::Minimalist),
            other => Err(format!(
                "unknown budget mode '{}' (expected 'standard' or 'minimalist')",
                other
            )),
        }
    }
}

/// Validated form input, immutable once submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    /// Monthly income after tax, always > 0
    pub income: f64,
    /// `"<category> <amount>"` tokens joined by `", "`
    pub expenses: String,
    /// Present only in goal-bearing mode, and only when > 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
}

/// One expense recovered from a `FinancialData::expenses` string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub category: String,
    pub amount: f64,
}

impl ExpenseItem {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("standard".parse::<BudgetMode>(), Ok(BudgetMode::Standard));
        assert_eq!("Minimalist".parse::<BudgetMode>(), Ok(BudgetMode::Minimalist));
        assert!("frugal".parse::<BudgetMode>().is_err());
    }

    #[test]
    fn test_mode_goal_bearing() {
        assert!(BudgetMode::Standard.takes_savings_goal());
        assert!(!BudgetMode::Minimalist.takes_savings_goal());
        assert_eq!(BudgetMode::Standard.toggle(), BudgetMode::Minimalist);
    }

    #[test]
    fn test_financial_data_wire_format() {
        let data = FinancialData {
            income: 4500.0,
            expenses: "Rent 1500, Food 300".into(),
            savings_goal: None,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["income"], 4500.0);
        assert!(json.get("savingsGoal").is_none());

        let with_goal = FinancialData {
            savings_goal: Some(500.0),
            ..data
        };
        let json = serde_json::to_value(&with_goal).unwrap();
        assert_eq!(json["savingsGoal"], 500.0);
    }
}
