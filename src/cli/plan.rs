//! Plan CLI command
//!
//! Builds an expense form from command-line arguments, submits it, and
//! either prints what would be sent (`--dry-run`) or asks the AI service for
//! a plan and prints the report.

use clap::Args;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::ai::GeminiClient;
use crate::config::{ApiKey, Settings};
use crate::display::{format_financial_data, format_plan_report};
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetMode;
use crate::services::session::UNKNOWN_ERROR;
use crate::services::{
    reduce, request_plan, ExpenseForm, PlanSession, PlanView, RowField, SessionAction,
};

/// Arguments for `budget plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Monthly income after tax
    #[arg(short, long)]
    pub income: String,

    /// Monthly savings goal (standard mode only)
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Budgeting mode: standard or minimalist
    #[arg(short, long)]
    pub mode: Option<BudgetMode>,

    /// An expense as "<category>=<amount>"; repeat for each expense
    #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT", value_parser = parse_expense_arg)]
    pub expenses: Vec<(String, String)>,

    /// Validate and print the request without calling the AI service
    #[arg(long)]
    pub dry_run: bool,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Split `"<category>=<amount>"` at the last `=`
pub fn parse_expense_arg(value: &str) -> Result<(String, String), String> {
    match value.rsplit_once('=') {
        Some((category, amount)) => Ok((category.to_string(), amount.to_string())),
        None => Err(format!(
            "expected CATEGORY=AMOUNT, got '{}'",
            value
        )),
    }
}

/// Fill an expense form the way a user would in the TUI
pub fn build_form(args: &PlanArgs, settings: &Settings) -> ExpenseForm {
    let mut form = ExpenseForm::new().with_mode(args.mode.unwrap_or(settings.default_mode));
    form.income = args.income.clone();
    form.savings_goal = args.goal.clone().unwrap_or_default();

    let first = form.rows()[0].id;
    for (index, (category, amount)) in args.expenses.iter().enumerate() {
        let id = if index == 0 { first } else { form.add_row() };
        form.edit_row(id, RowField::Category, category.as_str());
        form.edit_row(id, RowField::Amount, amount.as_str());
    }
    form
}

/// Handle `budget plan`
pub fn handle_plan_command(runtime: &Runtime, settings: &Settings, args: PlanArgs) -> BudgetResult<()> {
    let mut form = build_form(&args, settings);
    let mode = form.mode;
    let data = form.submit()?;

    if args.dry_run {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            println!("Mode:         {}", mode);
            print!("{}", format_financial_data(&data, &settings.currency_symbol));
        }
        return Ok(());
    }

    let client = GeminiClient::new(settings, ApiKey::resolve()?)?;

    let session = reduce(PlanSession::new(), SessionAction::Submitted(data.clone()));
    let action = runtime.block_on(request_plan(&client, &data, mode));
    debug!(?action, "plan request settled");
    let session = reduce(session, action);

    match session.view() {
        PlanView::Ready(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_plan_report(&report, &settings.currency_symbol));
            }
            Ok(())
        }
        PlanView::Error(message) => Err(BudgetError::PlanFailed(message)),
        PlanView::Loading | PlanView::Empty => Err(BudgetError::PlanFailed(UNKNOWN_ERROR.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(income: &str, goal: Option<&str>, expenses: &[(&str, &str)]) -> PlanArgs {
        PlanArgs {
            income: income.into(),
            goal: goal.map(String::from),
            mode: None,
            expenses: expenses
                .iter()
                .map(|(c, a)| (c.to_string(), a.to_string()))
                .collect(),
            dry_run: true,
            json: false,
        }
    }

    #[test]
    fn test_parse_expense_arg() {
        assert_eq!(
            parse_expense_arg("Rent=1500"),
            Ok(("Rent".to_string(), "1500".to_string()))
        );
        assert_eq!(
            parse_expense_arg("A=B=20"),
            Ok(("A=B".to_string(), "20".to_string()))
        );
        assert!(parse_expense_arg("Rent 1500").is_err());
    }

    #[test]
    fn test_build_form_fills_rows_in_order() {
        let settings = Settings::default();
        let form = build_form(&args("3000", Some("200"), &[("Rent", "1000"), ("Food", "250")]), &settings);
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.rows()[1].category, "Food");
        assert_eq!(form.savings_goal, "200");
        assert_eq!(form.mode, BudgetMode::Standard);
    }

    #[test]
    fn test_mode_defaults_to_settings() {
        let settings = Settings {
            default_mode: BudgetMode::Minimalist,
            ..Settings::default()
        };
        let form = build_form(&args("3000", None, &[]), &settings);
        assert_eq!(form.mode, BudgetMode::Minimalist);
    }

    #[test]
    fn test_validation_error_is_returned() {
        let runtime = Runtime::new().unwrap();
        let err = handle_plan_command(
            &runtime,
            &Settings::default(),
            args("2000", None, &[("Rent", "2500")]),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_dry_run_succeeds_without_key() {
        let runtime = Runtime::new().unwrap();
        let result = handle_plan_command(
            &runtime,
            &Settings::default(),
            args("3000", None, &[("Rent", "1000")]),
        );
        assert!(result.is_ok());
    }
}
