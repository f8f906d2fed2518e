//! Plan session
//!
//! Tracks one submit/plan cycle: the submitted data, whether a request is in
//! flight, and either the plan or the error it produced. The session is a
//! plain value; `reduce` returns the next one.

use serde::Serialize;
use tracing::{error, info};

use crate::ai::PlanGenerator;
use crate::models::{BudgetItem, BudgetMode, BudgetPlan, ExpenseItem, FinancialData};

use super::reconcile::{
    compute_current, compute_recommended_totals, parse_expenses, reconcile, CurrentTotals,
    RecommendedTotals,
};

/// Shown when a failure carries no description
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Events that move a session forward
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// The form passed validation and a request should start
    Submitted(FinancialData),
    /// The generator returned a plan
    Resolved(BudgetPlan),
    /// The generator failed; the message is ready for display
    Failed(String),
}

/// State of the current plan request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanSession {
    data: Option<FinancialData>,
    plan: Option<BudgetPlan>,
    error: Option<String>,
    loading: bool,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&FinancialData> {
        self.data.as_ref()
    }

    pub fn plan(&self) -> Option<&BudgetPlan> {
        self.plan.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// What the results area should show right now
    pub fn view(&self) -> PlanView {
        if self.loading {
            return PlanView::Loading;
        }
        if let Some(message) = &self.error {
            return PlanView::Error(message.clone());
        }
        match (&self.data, &self.plan) {
            (Some(data), Some(plan)) => PlanView::Ready(Box::new(PlanReport::build(data, plan))),
            _ => PlanView::Empty,
        }
    }
}

/// Apply one action to a session
pub fn reduce(session: PlanSession, action: SessionAction) -> PlanSession {
    match action {
        SessionAction::Submitted(_) if session.loading => session,
        SessionAction::Submitted(data) => PlanSession {
            data: Some(data),
            plan: None,
            error: None,
            loading: true,
        },
        SessionAction::Resolved(plan) => PlanSession {
            plan: Some(plan),
            error: None,
            loading: false,
            ..session
        },
        SessionAction::Failed(message) => PlanSession {
            plan: None,
            error: Some(message),
            loading: false,
            ..session
        },
    }
}

/// Run the one outstanding request and turn its outcome into an action
pub async fn request_plan<G>(generator: &G, data: &FinancialData, mode: BudgetMode) -> SessionAction
where
    G: PlanGenerator + ?Sized,
{
    match generator.generate(data, mode).await {
        Ok(plan) => {
            info!(categories = plan.budget_breakdown.len(), "plan request finished");
            SessionAction::Resolved(plan)
        }
        Err(err) => {
            error!(error = %err, "error generating budget plan");
            SessionAction::Failed(failure_message(&err.to_string()))
        }
    }
}

/// Wrap a failure description for display
pub fn failure_message(description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        format!("Failed to generate budget plan: {}", description)
    }
}

/// Mutually exclusive states of the results area
#[derive(Debug, Clone, PartialEq)]
pub enum PlanView {
    Loading,
    Error(String),
    Empty,
    Ready(Box<PlanReport>),
}

/// Everything the results view renders for a finished plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub income: f64,
    pub summary: String,
    pub current_expenses: Vec<ExpenseItem>,
    pub current: CurrentTotals,
    pub recommendations: Vec<BudgetItem>,
    pub recommended: RecommendedTotals,
    pub financial_tips: Vec<String>,
    /// Present when the user asked for a savings goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
    /// Present only when the plan has suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surplus_suggestions: Option<Vec<String>>,
}

impl PlanReport {
    /// Reconcile a plan against the data it was generated from
    pub fn build(data: &FinancialData, plan: &BudgetPlan) -> Self {
        let current_expenses = parse_expenses(&data.expenses);
        let current = compute_current(&current_expenses, data.income);
        let recommendations = reconcile(&current_expenses, plan);
        let recommended = compute_recommended_totals(plan, data.income);

        Self {
            income: data.income,
            summary: plan.summary.clone(),
            current_expenses,
            current,
            recommendations,
            recommended,
            financial_tips: plan.financial_tips.clone(),
            savings_goal: data.savings_goal,
            surplus_suggestions: plan.surplus().map(<[String]>::to_vec),
        }
    }

    /// Goal banner text, when a goal was set
    pub fn goal_banner(&self) -> Option<String> {
        self.savings_goal.map(|goal| {
            format!(
                "This plan is built to help you save {} every month.",
                crate::models::format_currency(goal)
            )
        })
    }
}
