//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod classify;
pub mod plan;

pub use classify::handle_classify_command;
pub use plan::{handle_plan_command, PlanArgs};
