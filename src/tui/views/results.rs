//! Results view
//!
//! Renders whichever presentation state the plan session is in: loading,
//! error, empty, or the finished report.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Money;
use crate::services::{PlanReport, PlanView};
use crate::tui::app::App;

/// Render the results panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Your Budget Plan ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let view = app.session.view();
    let lines = view_lines(&view, &app.settings.currency_symbol);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Lines for one presentation state
pub fn view_lines(view: &PlanView, symbol: &str) -> Vec<Line<'static>> {
    match view {
        PlanView::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Budget Boss is crunching the numbers...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Building a plan around your income and expenses.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        PlanView::Error(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Something went wrong",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
        ],
        PlanView::Empty => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your personalized budget will appear here.",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "Fill in your income and expenses, then press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        PlanView::Ready(report) => report_lines(report, symbol),
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn money(amount: f64, symbol: &str) -> String {
    Money::from_amount(amount).format_with_symbol(symbol)
}

fn amount_style(amount: f64) -> Style {
    if amount < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn totals_line(label: &str, monthly: f64, annual: f64, symbol: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::White)),
        Span::styled(format!("{:>14}", money(monthly, symbol)), amount_style(monthly)),
        Span::styled(
            format!("{:>16}", format!("{} / yr", money(annual, symbol))),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn report_lines(report: &PlanReport, symbol: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !report.summary.is_empty() {
        lines.push(Line::from(report.summary.clone()));
        lines.push(Line::from(""));
    }

    if let Some(banner) = report.goal_banner() {
        lines.push(Line::from(Span::styled(
            banner,
            Style::default().fg(Color::Black).bg(Color::Green),
        )));
        lines.push(Line::from(""));
    }

    lines.push(heading("Current Spending"));
    for item in &report.current_expenses {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<24}", item.category)),
            Span::raw(format!("{:>14}", money(item.amount, symbol))),
        ]));
    }
    lines.push(totals_line(
        "  Total expenses",
        report.current.total_expenses,
        report.current.total_expenses * 12.0,
        symbol,
    ));
    lines.push(totals_line(
        "  Current savings",
        report.current.current_savings,
        report.current.annual_savings(),
        symbol,
    ));
    lines.push(Line::from(""));

    lines.push(heading("Recommended Budget"));
    for item in &report.recommendations {
        let style = if item.recommended_amount == 0.0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", item.category), style),
            Span::styled(format!("{:>14}", money(item.recommended_amount, symbol)), style),
        ]));
        if !item.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", item.notes),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines.push(totals_line(
        "  Total recommended",
        report.recommended.total_recommended,
        report.recommended.total_recommended * 12.0,
        symbol,
    ));
    lines.push(totals_line(
        "  Available to save",
        report.recommended.total_available,
        report.recommended.annual_available(),
        symbol,
    ));

    if !report.financial_tips.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Financial Tips"));
        for tip in &report.financial_tips {
            lines.push(Line::from(format!("  - {}", tip)));
        }
    }

    if let Some(suggestions) = &report.surplus_suggestions {
        lines.push(Line::from(""));
        lines.push(heading("Making the Most of Your Surplus"));
        for suggestion in suggestions {
            lines.push(Line::from(format!("  - {}", suggestion)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, BudgetPlan, FinancialData};

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_non_ready_states() {
        assert!(text(&view_lines(&PlanView::Loading, "$")).contains("crunching"));
        assert!(text(&view_lines(&PlanView::Empty, "$")).contains("will appear here"));
        let error = text(&view_lines(&PlanView::Error("Failed to generate budget plan: x".into()), "$"));
        assert!(error.contains("Failed to generate budget plan: x"));
    }

    #[test]
    fn test_ready_state() {
        let data = FinancialData {
            income: 5000.0,
            expenses: "Rent 1800, Takeout 300".into(),
            savings_goal: Some(1000.0),
        };
        let plan = BudgetPlan {
            summary: "Solid footing.".into(),
            budget_breakdown: vec![BudgetItem::new("Rent", 1800.0, "Fixed cost")],
            financial_tips: vec!["Meal prep on Sundays".into()],
            ..BudgetPlan::default()
        };
        let view = PlanView::Ready(Box::new(PlanReport::build(&data, &plan)));
        let rendered = text(&view_lines(&view, "$"));

        assert!(rendered.contains("Solid footing."));
        assert!(rendered.contains("save $1,000.00 every month"));
        assert!(rendered.contains("Takeout"));
        assert!(rendered.contains("This expense was removed"));
        assert!(rendered.contains("$3,200.00"));
        assert!(rendered.contains("Meal prep on Sundays"));
        assert!(!rendered.contains("Surplus"));
    }
}
