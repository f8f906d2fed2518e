//! Service layer for Budget Boss
//!
//! The service layer holds the logic between the front ends and the AI
//! client: form intake and validation, the plan session cycle, and
//! reconciliation of a returned plan against the user's own expenses.

pub mod intake;
pub mod reconcile;
pub mod session;
pub mod validator;

pub use intake::{ExpenseForm, ExpenseRow, RowField, RowId};
pub use reconcile::{
    compute_current, compute_recommended_totals, is_amount_text, parse_expenses, reconcile,
    CurrentTotals, RecommendedTotals, REMOVED_EXPENSE_NOTE,
};
pub use session::{
    failure_message, reduce, request_plan, PlanReport, PlanSession, PlanView, SessionAction,
};
pub use validator::{validate, FormInput, ValidationError};
