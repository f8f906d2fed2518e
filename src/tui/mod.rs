//! Terminal User Interface module
//!
//! This module provides the interactive Budget Boss interface using ratatui:
//! an expense form on the left, the generated plan on the right.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
