//! Plan generation through the hosted AI service
//!
//! `PlanGenerator` is the seam between the plan session and the network.
//! `GeminiClient` is the real implementation; tests swap in their own.

pub mod client;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;

use crate::error::BudgetResult;
use crate::models::{BudgetMode, BudgetPlan, FinancialData};

pub use client::GeminiClient;

/// Anything that can turn validated form input into a budget plan
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, data: &FinancialData, mode: BudgetMode) -> BudgetResult<BudgetPlan>;
}
