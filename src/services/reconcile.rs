//! Plan reconciliation
//!
//! Recovers the user's expenses from the submitted expense string, computes
//! current and recommended totals, and lines the AI breakdown up with the
//! user's own categories so none of them silently disappears.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::{BudgetItem, BudgetPlan, ExpenseItem};

/// Note attached to categories the plan left out
pub const REMOVED_EXPENSE_NOTE: &str =
    "This expense was removed to help you reach your savings goal.";

/// Differences smaller than this are treated as zero
pub const ZERO_TOLERANCE: f64 = 0.001;

fn expense_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.*?)\s*(\d+(?:\.\d+)?)$").expect("invalid expense token regex")
    })
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("invalid amount regex"))
}

/// Whether `text` is an amount `parse_expenses` reads back unchanged
///
/// Plain digits with an optional fractional part: no sign, exponent, or bare
/// leading or trailing `.`.
pub fn is_amount_text(text: &str) -> bool {
    amount_re().is_match(text)
}

/// Parse `"<category> <amount>"` tokens separated by commas or newlines
///
/// Tokens that don't end in a number, or have nothing before it, are dropped.
pub fn parse_expenses(expenses: &str) -> Vec<ExpenseItem> {
    expenses
        .split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let caps = expense_token_re().captures(token)?;
            let category = caps.get(1)?.as_str().trim();
            if category.is_empty() {
                return None;
            }
            let amount = caps.get(2)?.as_str().parse::<f64>().ok()?;
            Some(ExpenseItem::new(category, amount))
        })
        .collect()
}

/// What the user spends and keeps today
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTotals {
    pub total_expenses: f64,
    /// May be negative
    pub current_savings: f64,
}

impl CurrentTotals {
    pub fn annual_savings(&self) -> f64 {
        self.current_savings * 12.0
    }
}

/// Totals of the recommended plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTotals {
    pub total_recommended: f64,
    /// Never negative
    pub total_available: f64,
}

impl RecommendedTotals {
    pub fn annual_available(&self) -> f64 {
        self.total_available * 12.0
    }
}

/// Sum the user's expenses and what is left of income
pub fn compute_current(items: &[ExpenseItem], income: f64) -> CurrentTotals {
    let total_expenses: f64 = items.iter().map(|item| item.amount).sum();
    CurrentTotals {
        total_expenses,
        current_savings: income - total_expenses,
    }
}

/// Sum the recommended breakdown and what is left of income
pub fn compute_recommended_totals(plan: &BudgetPlan, income: f64) -> RecommendedTotals {
    let total_recommended: f64 = plan
        .budget_breakdown
        .iter()
        .map(|item| item.recommended_amount)
        .sum();

    let remaining = income - total_recommended;
    let total_available = if remaining.abs() < ZERO_TOLERANCE {
        0.0
    } else {
        remaining.max(0.0)
    };

    RecommendedTotals {
        total_recommended,
        total_available,
    }
}

/// One recommended line per original expense, in the user's order
///
/// Categories match case-insensitively. When the breakdown repeats a
/// category, its last entry wins.
pub fn reconcile(user_items: &[ExpenseItem], plan: &BudgetPlan) -> Vec<BudgetItem> {
    let by_category: HashMap<String, &BudgetItem> = plan
        .budget_breakdown
        .iter()
        .map(|item| (item.category.to_lowercase(), item))
        .collect();

    user_items
        .iter()
        .map(|expense| {
            by_category
                .get(&expense.category.to_lowercase())
                .map(|item| (*item).clone())
                .unwrap_or_else(|| BudgetItem::new(&expense.category, 0.0, REMOVED_EXPENSE_NOTE))
        })
        .collect()
}
