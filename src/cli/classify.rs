//! Classify CLI command
//!
//! Shows how an expense category is treated by the form validator.

use crate::display::format_classification;
use crate::error::BudgetResult;

/// Handle `budget classify`
pub fn handle_classify_command(categories: &[String]) -> BudgetResult<()> {
    for category in categories {
        print!("{}", format_classification(category));
    }
    Ok(())
}
