//! Plan report formatting
//!
//! Renders a `PlanReport` for the CLI: summary, current spending, the
//! recommended budget side by side with it, then tips.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{FinancialData, Money};
use crate::services::PlanReport;

use super::separator;

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Recommended")]
    recommended: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

#[derive(Tabled)]
struct TotalsRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Annual")]
    annual: String,
}

fn money(amount: f64, symbol: &str) -> String {
    Money::from_amount(amount).format_with_symbol(symbol)
}

/// Format a finished plan for the terminal
pub fn format_plan_report(report: &PlanReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Your Budget Plan\n");
    output.push_str(&separator(60));
    output.push('\n');
    if !report.summary.is_empty() {
        output.push_str(&report.summary);
        output.push_str("\n\n");
    }

    if let Some(banner) = report.goal_banner() {
        output.push_str(&format!("* {}\n\n", banner));
    }

    let rows: Vec<ComparisonRow> = report
        .current_expenses
        .iter()
        .zip(&report.recommendations)
        .map(|(current, recommended)| ComparisonRow {
            category: current.category.clone(),
            current: money(current.amount, symbol),
            recommended: money(recommended.recommended_amount, symbol),
            notes: recommended.notes.clone(),
        })
        .collect();

    if rows.is_empty() {
        output.push_str("No expenses to compare.\n\n");
    } else {
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .modify(Columns::new(1..3), Alignment::right());
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }

    let totals = vec![
        TotalsRow {
            label: "Current expenses",
            monthly: money(report.current.total_expenses, symbol),
            annual: money(report.current.total_expenses * 12.0, symbol),
        },
        TotalsRow {
            label: "Current savings",
            monthly: money(report.current.current_savings, symbol),
            annual: money(report.current.annual_savings(), symbol),
        },
        TotalsRow {
            label: "Recommended spending",
            monthly: money(report.recommended.total_recommended, symbol),
            annual: money(report.recommended.total_recommended * 12.0, symbol),
        },
        TotalsRow {
            label: "Available to save",
            monthly: money(report.recommended.total_available, symbol),
            annual: money(report.recommended.annual_available(), symbol),
        },
    ];
    let mut table = Table::new(totals);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    output.push_str(&table.to_string());
    output.push('\n');

    if !report.financial_tips.is_empty() {
        output.push_str("\nFinancial Tips\n");
        for tip in &report.financial_tips {
            output.push_str(&format!("  - {}\n", tip));
        }
    }

    if let Some(suggestions) = &report.surplus_suggestions {
        output.push_str("\nMaking the Most of Your Surplus\n");
        for suggestion in suggestions {
            output.push_str(&format!("  - {}\n", suggestion));
        }
    }

    output
}

/// Format the data a dry run would have sent
pub fn format_financial_data(data: &FinancialData, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:       {}\n", money(data.income, symbol)));
    output.push_str(&format!("Expenses:     {}\n", data.expenses));
    match data.savings_goal {
        Some(goal) => output.push_str(&format!("Savings goal: {}\n", money(goal, symbol))),
        None => output.push_str("Savings goal: (none)\n"),
    }
    output
}
