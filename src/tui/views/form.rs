//! Expense form view
//!
//! Mode selector, income, savings goal (Standard mode only), the expense
//! rows, and the form's error line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::BudgetMode;
use crate::tui::app::{App, Focus};
use crate::tui::widgets::render_input_with_cursor;

/// Render the form panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Your Finances ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(form_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Build the lines of the form
pub fn form_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![mode_line(app), Line::from("")];

    lines.push(field_line(app, Focus::Income, "Monthly income  ", &app.form.income));
    if app.form.mode.takes_savings_goal() {
        lines.push(field_line(
            app,
            Focus::Goal,
            "Savings goal    ",
            &app.form.savings_goal,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Monthly expenses",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));

    for (index, row) in app.form.rows().iter().enumerate() {
        let marker = if row.removable { "  " } else { "* " };
        let mut spans = vec![Span::styled(
            format!("{:>2}.{}", index + 1, marker),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(
            field_line(app, Focus::RowCategory(index), "", &row.category)
                .spans
                .into_iter(),
        );
        spans.push(Span::raw("  "));
        spans.extend(
            field_line(app, Focus::RowAmount(index), "", &row.amount)
                .spans
                .into_iter(),
        );
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        "Ctrl+N add row  Ctrl+D remove row",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    if let Some(error) = app.form.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    let submit = if app.session.is_loading() {
        Span::styled(
            "Generating your plan...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "[ Enter ] Generate budget plan",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(submit));

    lines
}

fn mode_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::Mode;
    let mut spans = vec![Span::styled(
        "Mode  ",
        Style::default().fg(Color::Cyan),
    )];

    for mode in BudgetMode::ALL {
        let selected = mode == app.form.mode;
        let style = match (selected, focused) {
            (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
            (true, false) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", mode), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// A field shows the live edit buffer when focused
fn field_line(app: &App, focus: Focus, label: &str, value: &str) -> Line<'static> {
    if app.focus == focus {
        render_input_with_cursor(label, app.input.value(), app.input.cursor, true)
    } else if value.is_empty() {
        let mut line = render_input_with_cursor(label, "", 0, false);
        line.spans.push(Span::styled(
            placeholder(focus),
            Style::default().fg(Color::DarkGray),
        ));
        line
    } else {
        render_input_with_cursor(label, value, 0, false)
    }
}

fn placeholder(focus: Focus) -> &'static str {
    match focus {
        Focus::Income => "e.g. 4500",
        Focus::Goal => "optional",
        Focus::RowCategory(_) => "category",
        Focus::RowAmount(_) => "amount",
        Focus::Mode => "",
    }
}
