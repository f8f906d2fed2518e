//! Core data models for Budget Boss
//!
//! This module contains the data structures that flow between the expense
//! form, the plan generator and the results view.

pub mod financial;
pub mod keywords;
pub mod money;
pub mod plan;

pub use financial::{BudgetMode, ExpenseItem, FinancialData};
pub use keywords::{classify, Classification, INFLEXIBLE_KEYWORDS, SURVIVAL_KEYWORDS};
pub use money::{format_currency, Money};
pub use plan::{BudgetItem, BudgetPlan, ParsedPlan};
