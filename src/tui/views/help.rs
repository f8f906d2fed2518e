//! Help overlay
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Form"),
        Line::from(""),
        key_line("Tab / Down", "Next field"),
        key_line("S-Tab / Up", "Previous field"),
        key_line("Left/Right", "Move cursor (or switch mode on the selector)"),
        key_line("Ctrl+N", "Add an expense row"),
        key_line("Ctrl+D", "Remove the focused row"),
        key_line("Ctrl+T / F2", "Switch budgeting mode"),
        key_line("Enter", "Generate budget plan"),
        Line::from(""),
        section("Results"),
        Line::from(""),
        key_line("PgUp/PgDn", "Scroll the plan"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("F1", "Show this help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Rows marked * are always part of the form.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
