//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the expense form, which field has focus, the edit buffer for that field,
//! and the plan session.

use std::mem;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::ai::PlanGenerator;
use crate::config::settings::Settings;
use crate::services::{
    failure_message, reduce, request_plan, ExpenseForm, PlanSession, RowField, RowId,
    SessionAction,
};

use super::event::Event;
use super::widgets::TextInput;

/// Which form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Mode,
    Income,
    Goal,
    RowCategory(usize),
    RowAmount(usize),
}

impl Focus {
    /// Index of the focused expense row, if any
    pub fn row(self) -> Option<usize> {
        match self {
            Self::RowCategory(i) | Self::RowAmount(i) => Some(i),
            _ => None,
        }
    }

    /// Whether this control holds numbers
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Income | Self::Goal | Self::RowAmount(_))
    }
}

/// How plan requests are made
#[derive(Clone)]
pub enum Generator {
    Ready(Arc<dyn PlanGenerator>),
    /// No client could be built; submits fail with this reason
    Unavailable(String),
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// The expense form
    pub form: ExpenseForm,

    /// Focused control
    pub focus: Focus,

    /// Edit buffer for the focused text field
    pub input: TextInput,

    /// Current plan request and its outcome
    pub session: PlanSession,

    /// Vertical scroll of the results panel
    pub results_scroll: u16,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    generator: Generator,
    runtime: Handle,
    events: Sender<Event>,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, generator: Generator, runtime: Handle, events: Sender<Event>) -> Self {
        let form = if settings.seed_default_rows {
            ExpenseForm::seeded()
        } else {
            ExpenseForm::new()
        }
        .with_mode(settings.default_mode);

        let mut app = Self {
            settings,
            should_quit: false,
            form,
            focus: Focus::Income,
            input: TextInput::new(),
            session: PlanSession::new(),
            results_scroll: 0,
            show_help: false,
            status_message: None,
            generator,
            runtime,
            events,
        };
        app.load_input();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Controls in tab order; the goal field only exists in goal-bearing mode
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Mode, Focus::Income];
        if self.form.mode.takes_savings_goal() {
            order.push(Focus::Goal);
        }
        for i in 0..self.form.rows().len() {
            order.push(Focus::RowCategory(i));
            order.push(Focus::RowAmount(i));
        }
        order
    }

    /// Move focus to the next control, wrapping around
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(index + 1) % order.len()]);
    }

    /// Move focus to the previous control, wrapping around
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(index + order.len() - 1) % order.len()]);
    }

    /// Focus a control and load its text into the edit buffer
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = if self.focus_order().contains(&focus) {
            focus
        } else {
            Focus::Mode
        };
        self.load_input();
    }

    fn row_id(&self, index: usize) -> Option<RowId> {
        self.form.rows().get(index).map(|row| row.id)
    }

    /// Text of the focused field, if it is a text field
    pub fn focused_value(&self) -> Option<&str> {
        match self.focus {
            Focus::Mode => None,
            Focus::Income => Some(self.form.income.as_str()),
            Focus::Goal => Some(self.form.savings_goal.as_str()),
            Focus::RowCategory(i) => self.form.rows().get(i).map(|r| r.category.as_str()),
            Focus::RowAmount(i) => self.form.rows().get(i).map(|r| r.amount.as_str()),
        }
    }

    fn load_input(&mut self) {
        self.input = TextInput::with_content(self.focused_value().unwrap_or_default());
    }

    /// Write the edit buffer back into the form
    fn store_input(&mut self) {
        let value = self.input.value().to_string();
        match self.focus {
            Focus::Mode => {}
            Focus::Income => self.form.income = value,
            Focus::Goal => self.form.savings_goal = value,
            Focus::RowCategory(i) => {
                if let Some(id) = self.row_id(i) {
                    self.form.edit_row(id, RowField::Category, value);
                }
            }
            Focus::RowAmount(i) => {
                if let Some(id) = self.row_id(i) {
                    self.form.edit_row(id, RowField::Amount, value);
                }
            }
        }
    }

    /// Apply an edit to the focused field
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if self.focus == Focus::Mode {
            return;
        }
        edit(&mut self.input);
        self.store_input();
    }

    /// Type one character into the focused field
    pub fn type_char(&mut self, c: char) {
        if self.focus.is_numeric() && !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.edit_input(|input| input.insert(c));
    }

    /// Switch between budgeting modes
    pub fn toggle_mode(&mut self) {
        self.form.mode = self.form.mode.toggle();
        // The goal field disappears in Minimalist mode
        if self.focus == Focus::Goal && !self.form.mode.takes_savings_goal() {
            self.focus = Focus::Mode;
        }
        self.load_input();
        self.set_status(format!("{} mode", self.form.mode));
    }

    /// Append a row and focus its category
    pub fn add_row(&mut self) {
        self.form.add_row();
        let index = self.form.rows().len() - 1;
        self.set_focus(Focus::RowCategory(index));
    }

    /// Remove the focused row, when the form allows it
    pub fn remove_focused_row(&mut self) {
        let Some(index) = self.focus.row() else {
            self.set_status("Move to an expense row to remove it");
            return;
        };
        let Some(id) = self.row_id(index) else {
            return;
        };
        if self.form.remove_row(id) {
            let last = self.form.rows().len().saturating_sub(1);
            self.set_focus(Focus::RowCategory(index.min(last)));
            self.clear_status();
        } else {
            self.set_status("This row can't be removed");
        }
    }

    /// Validate the form and start a plan request
    ///
    /// Ignored while a request is already running.
    pub fn submit(&mut self) {
        if self.session.is_loading() {
            return;
        }

        let data = match self.form.submit() {
            Ok(data) => data,
            Err(_) => return,
        };
        let mode = self.form.mode;

        self.results_scroll = 0;
        self.clear_status();
        self.session = reduce(
            mem::take(&mut self.session),
            SessionAction::Submitted(data.clone()),
        );

        match self.generator.clone() {
            Generator::Ready(generator) => {
                info!(mode = %mode, "starting plan request");
                let events = self.events.clone();
                self.runtime.spawn(async move {
                    let action = request_plan(generator.as_ref(), &data, mode).await;
                    if events.send(Event::PlanFinished(action)).is_err() {
                        warn!("plan finished after the TUI closed");
                    }
                });
            }
            Generator::Unavailable(reason) => {
                let action = SessionAction::Failed(failure_message(&reason));
                self.apply(action);
            }
        }
    }

    /// Feed a settled request back into the session
    pub fn apply(&mut self, action: SessionAction) {
        self.session = reduce(mem::take(&mut self.session), action);
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    pub fn scroll_results_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }
}
