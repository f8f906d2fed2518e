//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::ai::GeminiClient;
use crate::config::credentials::ApiKey;
use crate::config::settings::Settings;

use super::app::{App, Generator};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Build the plan generator, or the reason there isn't one
///
/// Runs before raw mode so a key prompt still works.
fn build_generator(settings: &Settings) -> Generator {
    let client = ApiKey::resolve().and_then(|key| GeminiClient::new(settings, key));
    match client {
        Ok(client) => Generator::Ready(Arc::new(client)),
        Err(err) => {
            warn!(error = %err, "plan generator unavailable");
            Generator::Unavailable(err.to_string())
        }
    }
}

/// Run the TUI application
///
/// Plan requests are spawned on `runtime`; their results come back through
/// the event channel.
pub fn run_tui(runtime: Handle, settings: Settings) -> Result<()> {
    let generator = build_generator(&settings);

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();
    let mut app = App::new(settings, generator, runtime, events.sender());
    info!("tui started");

    let outcome = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!("tui stopped");
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
