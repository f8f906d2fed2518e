//! TUI Views module
//!
//! Contains the form panel, the results panel, the status bar and the help
//! overlay.

pub mod form;
pub mod help;
pub mod results;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    results::render(frame, app, layout.results);
    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        help::render(frame);
    }
}
