//! Logging setup
//!
//! Filters come from `BUDGET_BOSS_LOG` (standard `EnvFilter` syntax). The CLI
//! logs to stderr; the TUI owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGET_BOSS_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr, warnings and up unless overridden
pub fn init_cli() {
    // A subscriber may already be installed (tests, embedding)
    let _ = fmt()
        .with_env_filter(filter("warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Append logs to a file, info and up unless overridden
pub fn init_file(path: &Path) -> BudgetResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    let _ = fmt()
        .with_env_filter(filter("info"))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
