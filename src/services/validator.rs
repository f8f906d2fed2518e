//! Expense form validation
//!
//! Checks run in a fixed order and the first failure wins. Only the
//! inflexible (fixed) expenses are weighed against income; flexible spending
//! is what the plan generator is asked to rebalance.

use thiserror::Error;

use crate::models::{classify, BudgetMode, FinancialData, Money};

use super::intake::ExpenseRow;
use super::reconcile::is_amount_text;

/// Why a form submission was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid monthly income.")]
    InvalidIncome,

    #[error("Please enter at least one expense.")]
    NoExpenses,

    #[error("Please ensure all expense rows have a valid category and a positive amount.")]
    InvalidRow,

    #[error(
        "Your fixed expenses ({}) exceed your income. Please review your entries.",
        money(.total)
    )]
    FixedExpensesExceedIncome { total: f64 },

    #[error(
        "Your savings goal is too high. After fixed expenses you have {} left each month.",
        money(.available)
    )]
    SavingsGoalTooHigh { available: f64 },

    #[error(
        "Your savings goal leaves no money for essentials like {essential}. Please lower your goal."
    )]
    NoMoneyForEssentials { essential: String },
}

fn money(amount: &f64) -> Money {
    Money::from_amount(*amount)
}

fn cents(amount: f64) -> i64 {
    Money::from_amount(amount).cents()
}

fn dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Raw form contents handed to the validator
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub income: &'a str,
    pub savings_goal: &'a str,
    pub rows: &'a [ExpenseRow],
    pub mode: BudgetMode,
}

/// Parse a user-typed number; blank, non-numeric and non-finite text is `None`
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A row counts once either of its fields has non-blank text
pub fn is_filled(row: &ExpenseRow) -> bool {
    !row.category.trim().is_empty() || !row.amount.trim().is_empty()
}

/// Run every check and build the submission
pub fn validate(input: &FormInput<'_>) -> Result<FinancialData, ValidationError> {
    let income = parse_number(input.income)
        .filter(|v| *v > 0.0)
        .ok_or(ValidationError::InvalidIncome)?;

    let filled: Vec<&ExpenseRow> = input.rows.iter().filter(|row| is_filled(row)).collect();
    if filled.is_empty() {
        return Err(ValidationError::NoExpenses);
    }

    let mut amounts = Vec::with_capacity(filled.len());
    for row in &filled {
        if row.category.trim().is_empty() {
            return Err(ValidationError::InvalidRow);
        }
        // The amount must survive the trip through `parse_expenses`
        let text = row.amount.trim();
        if !is_amount_text(text) {
            return Err(ValidationError::InvalidRow);
        }
        let amount = parse_number(text)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::InvalidRow)?;
        amounts.push(amount);
    }

    // Budget checks compare whole cents so typed decimals cancel exactly
    let income_cents = cents(income);
    let inflexible_cents: i64 = filled
        .iter()
        .zip(&amounts)
        .filter(|(row, _)| classify(&row.category).inflexible)
        .map(|(_, amount)| cents(*amount))
        .sum();

    if inflexible_cents > income_cents {
        return Err(ValidationError::FixedExpensesExceedIncome {
            total: dollars(inflexible_cents),
        });
    }

    let savings_goal = if input.mode.takes_savings_goal() {
        parse_number(input.savings_goal).filter(|goal| *goal > 0.0)
    } else {
        None
    };

    if let Some(goal) = savings_goal {
        let remainder = income_cents - inflexible_cents - cents(goal);
        if remainder < 0 {
            return Err(ValidationError::SavingsGoalTooHigh {
                available: dollars(income_cents - inflexible_cents),
            });
        }
        if remainder == 0 {
            if let Some(row) = filled
                .iter()
                .find(|row| classify(&row.category).is_flexible_essential())
            {
                return Err(ValidationError::NoMoneyForEssentials {
                    essential: row.category.trim().to_string(),
                });
            }
        }
    }

    let expenses = filled
        .iter()
        .map(|row| format!("{} {}", row.category.trim(), row.amount))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(FinancialData {
        income,
        expenses,
        savings_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: &[(&str, &str)]) -> Vec<ExpenseRow> {
        items
            .iter()
            .map(|(category, amount)| ExpenseRow::removable(*category, *amount))
            .collect()
    }

    fn standard<'a>(income: &'a str, goal: &'a str, rows: &'a [ExpenseRow]) -> FormInput<'a> {
        FormInput {
            income,
            savings_goal: goal,
            rows,
            mode: BudgetMode::Standard,
        }
    }

    #[test]
    fn test_invalid_income() {
        let r = rows(&[("Food", "100")]);
        for income in ["", "0", "-50", "abc", "NaN", "inf"] {
            assert_eq!(
                validate(&standard(income, "", &r)),
                Err(ValidationError::InvalidIncome),
                "income {:?}",
                income
            );
        }
    }

    #[test]
    fn test_income_checked_before_rows() {
        let r = rows(&[("", "")]);
        assert_eq!(
            validate(&standard("0", "", &r)),
            Err(ValidationError::InvalidIncome)
        );
    }

    #[test]
    fn test_no_filled_rows() {
        let r = rows(&[("", ""), ("  ", " ")]);
        assert_eq!(
            validate(&standard("3000", "", &r)),
            Err(ValidationError::NoExpenses)
        );
    }

    #[test]
    fn test_invalid_rows() {
        for bad in [("Food", ""), ("", "100"), ("Food", "0"), ("Food", "-5"), ("Food", "lots")] {
            let r = rows(&[("Rent", "1000"), bad]);
            assert_eq!(
                validate(&standard("3000", "", &r)),
                Err(ValidationError::InvalidRow),
                "row {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let r = rows(&[("Rent", "1000"), ("", ""), ("Food", "300")]);
        let data = validate(&standard("3000", "", &r)).unwrap();
        assert_eq!(data.expenses, "Rent 1000, Food 300");
    }

    #[test]
    fn test_fixed_expenses_exceed_income() {
        let r = rows(&[("Rent", "2500")]);
        let err = validate(&standard("2000", "", &r)).unwrap_err();
        assert_eq!(err, ValidationError::FixedExpensesExceedIncome { total: 2500.0 });
        assert_eq!(
            err.to_string(),
            "Your fixed expenses ($2,500.00) exceed your income. Please review your entries."
        );
    }

    #[test]
    fn test_flexible_spending_may_exceed_income() {
        // Only fixed obligations are weighed against income
        let r = rows(&[("Rent", "1000"), ("Shopping", "5000")]);
        assert!(validate(&standard("2000", "", &r)).is_ok());
    }

    #[test]
    fn test_goal_too_high_wins_over_essentials() {
        let r = rows(&[("Rent", "1000"), ("Food", "50")]);
        let err = validate(&standard("3000", "2900", &r)).unwrap_err();
        assert_eq!(err, ValidationError::SavingsGoalTooHigh { available: 2000.0 });
    }

    #[test]
    fn test_no_money_for_essentials_at_exact_zero() {
        let r = rows(&[("Rent", "1000"), ("Groceries", "50")]);
        let err = validate(&standard("3000", "2000", &r)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoMoneyForEssentials {
                essential: "Groceries".into()
            }
        );
    }

    #[test]
    fn test_no_money_for_essentials_with_cents() {
        let r = rows(&[("Rent", "1000.10"), ("Groceries", "50")]);
        let err = validate(&standard("3000.30", "2000.20", &r)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NoMoneyForEssentials {
                essential: "Groceries".into()
            }
        );
    }

    #[test]
    fn test_goal_one_cent_too_high_with_cents() {
        let r = rows(&[("Rent", "1000.10"), ("Groceries", "50")]);
        let err = validate(&standard("3000.30", "2000.21", &r)).unwrap_err();
        assert_eq!(err, ValidationError::SavingsGoalTooHigh { available: 2000.2 });
    }

    #[test]
    fn test_fixed_expenses_equal_to_income_with_cents() {
        let r = rows(&[("Rent", "1000.10"), ("Car Payment", "0.20")]);
        assert!(validate(&standard("1000.30", "", &r)).is_ok());
    }

    #[test]
    fn test_amounts_parse_expenses_cannot_read_are_rejected() {
        for amount in [".5", "5.", "1e2", "+40", "1,000"] {
            let r = rows(&[("Coffee", amount)]);
            assert_eq!(
                validate(&standard("3000", "", &r)),
                Err(ValidationError::InvalidRow),
                "amount {:?}",
                amount
            );
        }
    }

    #[test]
    fn test_accepted_amounts_round_trip_through_parser() {
        use crate::services::reconcile::parse_expenses;

        let r = rows(&[("Coffee", "0.5"), ("Snacks", " 12 "), ("Gym", "29.99")]);
        let data = validate(&standard("3000", "", &r)).unwrap();
        let parsed = parse_expenses(&data.expenses);
        let read_back: Vec<(&str, f64)> = parsed
            .iter()
            .map(|item| (item.category.as_str(), item.amount))
            .collect();
        assert_eq!(read_back, [("Coffee", 0.5), ("Snacks", 12.0), ("Gym", 29.99)]);
    }

    #[test]
    fn test_exact_zero_without_essentials_passes() {
        let r = rows(&[("Rent", "1000"), ("Streaming", "15")]);
        let data = validate(&standard("3000", "2000", &r)).unwrap();
        assert_eq!(data.savings_goal, Some(2000.0));
    }

    #[test]
    fn test_essential_that_is_also_fixed_does_not_count() {
        // "Health Insurance" is inflexible first, so no flexible essential remains
        let r = rows(&[("Health Insurance", "500"), ("Movies", "20")]);
        assert!(validate(&standard("2500", "2000", &r)).is_ok());
    }

    #[test]
    fn test_goal_ignored_in_minimalist_mode() {
        let r = rows(&[("Rent", "1000"), ("Food", "50")]);
        let input = FormInput {
            income: "3000",
            savings_goal: "2900",
            rows: &r,
            mode: BudgetMode::Minimalist,
        };
        let data = validate(&input).unwrap();
        assert_eq!(data.savings_goal, None);
    }

    #[test]
    fn test_zero_or_blank_goal_is_omitted() {
        let r = rows(&[("Food", "50")]);
        assert_eq!(validate(&standard("3000", "", &r)).unwrap().savings_goal, None);
        assert_eq!(validate(&standard("3000", "0", &r)).unwrap().savings_goal, None);
        assert_eq!(validate(&standard("3000", "x", &r)).unwrap().savings_goal, None);
    }

    #[test]
    fn test_serialization_keeps_raw_amount_text() {
        let r = rows(&[("  Car Payment ", "325.50"), ("Phone", "45")]);
        let data = validate(&standard("4000", "", &r)).unwrap();
        assert_eq!(data.income, 4000.0);
        assert_eq!(data.expenses, "Car Payment 325.50, Phone 45");
    }
}
