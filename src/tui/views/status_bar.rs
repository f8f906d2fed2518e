//! Status bar view
//!
//! Shows the budgeting mode, request state, status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(" Mode: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.form.mode.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    if app.session.is_loading() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Generating...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " Enter:Plan  F2:Mode  F1:Help  Esc:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
