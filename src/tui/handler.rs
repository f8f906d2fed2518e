//! Event handler for the TUI
//!
//! Routes keyboard events to the form, and settled plan requests to the
//! session.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Lines moved by one PageUp/PageDown
const PAGE: u16 = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::PlanFinished(action) => {
            app.apply(action);
            Ok(())
        }
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.show_help {
        // Any key closes help; Ctrl+C still quits
        if ctrl && key.code == KeyCode::Char('c') {
            app.quit();
        }
        app.show_help = false;
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Char('n') if ctrl => app.add_row(),
        KeyCode::Char('d') if ctrl => app.remove_focused_row(),
        KeyCode::Char('t') if ctrl => app.toggle_mode(),
        KeyCode::F(2) => app.toggle_mode(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.submit(),
        KeyCode::PageUp => app.scroll_results_up(PAGE),
        KeyCode::PageDown => app.scroll_results_down(PAGE),
        _ if app.focus == Focus::Mode => handle_mode_key(app, key),
        _ => handle_field_key(app, key),
    }

    Ok(())
}

/// Keys on the mode selector
fn handle_mode_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
    ) {
        app.toggle_mode();
    }
}

/// Keys while a text field is focused
fn handle_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(c),
        KeyCode::Backspace => app.edit_input(|input| input.backspace()),
        KeyCode::Delete => app.edit_input(|input| input.delete()),
        KeyCode::Left => app.edit_input(|input| input.move_left()),
        KeyCode::Right => app.edit_input(|input| input.move_right()),
        KeyCode::Home => app.edit_input(|input| input.move_start()),
        KeyCode::End => app.edit_input(|input| input.move_end()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetMode;
    use crate::services::PlanView;
    use crate::tui::app::tests::test_app;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_fill_and_submit_with_keys() {
        let runtime = Runtime::new().unwrap();
        let (mut app, rx) = test_app(&runtime);

        // starts on income
        type_str(&mut app, "3000");
        press(&mut app, KeyCode::Tab); // goal
        press(&mut app, KeyCode::Tab); // category
        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Tab); // amount
        type_str(&mut app, "1000");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_loading());

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        handle_event(&mut app, event).unwrap();
        assert!(matches!(app.session.view(), PlanView::Ready(_)));
    }

    #[test]
    fn test_mode_keys() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = test_app(&runtime);
        ctrl(&mut app, 't');
        assert_eq!(app.form.mode, BudgetMode::Minimalist);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Mode);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.mode, BudgetMode::Standard);
    }

    #[test]
    fn test_row_keys() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = test_app(&runtime);
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'n');
        assert_eq!(app.form.rows().len(), 3);
        ctrl(&mut app, 'd');
        assert_eq!(app.form.rows().len(), 2);
    }

    #[test]
    fn test_help_and_quit() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = test_app(&runtime);
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scrolling_saturates() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = test_app(&runtime);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.results_scroll, 0);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.results_scroll, PAGE);
    }
}
