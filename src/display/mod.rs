//! Display formatting for terminal output
//!
//! Provides utilities for formatting plans and classifications for the CLI.

pub mod classification;
pub mod plan;

pub use classification::format_classification;
pub use plan::{format_financial_data, format_plan_report};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
