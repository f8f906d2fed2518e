//! Expense intake form
//!
//! Holds the editable form: income, optional savings goal, and an ordered
//! list of expense rows. `submit` runs the validator and keeps at most one
//! error message, replacing whatever was there before.

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{BudgetMode, FinancialData};

use super::validator::{self, FormInput, ValidationError};

/// Identifier of one expense row
pub type RowId = Uuid;

/// Which text field of a row is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Category,
    Amount,
}

/// One editable expense row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: RowId,
    pub category: String,
    pub amount: String,
    /// Seeded rows cannot be removed
    pub removable: bool,
}

impl ExpenseRow {
    /// A row the user may delete
    pub fn removable(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount: amount.into(),
            removable: true,
        }
    }

    /// A row pinned in place by the form
    pub fn fixed(category: impl Into<String>) -> Self {
        Self {
            removable: false,
            ..Self::removable(category, "")
        }
    }

    /// Whether either field has been typed into
    pub fn is_filled(&self) -> bool {
        validator::is_filled(self)
    }
}

/// State of the expense form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub mode: BudgetMode,
    pub income: String,
    pub savings_goal: String,
    rows: Vec<ExpenseRow>,
    error: Option<String>,
}

impl ExpenseForm {
    /// A form with one empty, removable row
    pub fn new() -> Self {
        Self::with_rows(vec![ExpenseRow::removable("", "")])
    }

    /// A form pre-populated with "Rent" and "Food", neither removable
    pub fn seeded() -> Self {
        Self::with_rows(vec![ExpenseRow::fixed("Rent"), ExpenseRow::fixed("Food")])
    }

    fn with_rows(rows: Vec<ExpenseRow>) -> Self {
        Self {
            mode: BudgetMode::default(),
            income: String::new(),
            savings_goal: String::new(),
            rows,
            error: None,
        }
    }

    /// Set the budgeting mode
    pub fn with_mode(mut self, mode: BudgetMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&ExpenseRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Current error message, if the last submit failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Append an empty, removable row
    pub fn add_row(&mut self) -> RowId {
        let row = ExpenseRow::removable("", "");
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Delete a row; pinned rows and the last remaining row stay
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        match self.rows.iter().position(|row| row.id == id) {
            Some(index) if self.rows[index].removable => {
                self.rows.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Replace one field of a row
    ///
    /// Any text is stored as typed. Amounts are checked on `submit`, which
    /// accepts only plain digits with an optional fractional part, so the CLI
    /// and the TUI reject the same input.
    pub fn edit_row(&mut self, id: RowId, field: RowField, value: impl Into<String>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match field {
            RowField::Category => row.category = value.into(),
            RowField::Amount => row.amount = value.into(),
        }
        true
    }

    /// Validate and build the submission
    ///
    /// On failure the error message replaces any previous one. On success the
    /// error is cleared; the fields themselves are left as typed.
    pub fn submit(&mut self) -> Result<FinancialData, ValidationError> {
        let input = FormInput {
            income: &self.income,
            savings_goal: &self.savings_goal,
            rows: &self.rows,
            mode: self.mode,
        };

        match validator::validate(&input) {
            Ok(data) => {
                info!(
                    mode = %self.mode,
                    rows = self.rows.iter().filter(|row| row.is_filled()).count(),
                    has_goal = data.savings_goal.is_some(),
                    "expense form accepted"
                );
                self.error = None;
                Ok(data)
            }
            Err(err) => {
                debug!(error = %err, "expense form rejected");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}
