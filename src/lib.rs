//! Budget Boss - AI-assisted monthly budget planning
//!
//! This library provides the core functionality for the Budget Boss
//! application. A user enters income, expenses and an optional savings goal;
//! the form is validated locally, an AI service proposes a budget, and the
//! proposal is reconciled against the user's own expense list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the API credential
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (form data, plans, keyword classification)
//! - `services`: Form intake, validation, plan session and reconciliation
//! - `ai`: The plan generator trait and the Gemini client
//! - `display`: Terminal formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_boss::services::{ExpenseForm, RowField};
//!
//! let mut form = ExpenseForm::new();
//! form.income = "4000".into();
//! let row = form.rows()[0].id;
//! form.edit_row(row, RowField::Category, "Rent");
//! form.edit_row(row, RowField::Amount, "1500");
//! let data = form.submit()?;
//! ```

pub mod ai;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
