//! User settings for Budget Boss
//!
//! Manages the AI client configuration and form preferences.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::BudgetMode;

/// User settings for Budget Boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Gemini model used to generate plans
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Sampling temperature sent with every request
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Budgeting mode selected when the TUI starts
    #[serde(default)]
    pub default_mode: BudgetMode,

    /// Start the expense form with fixed "Rent" and "Food" rows
    #[serde(default)]
    pub seed_default_rows: bool,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            model: default_model(),
            api_base_url: default_api_base_url(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            default_mode: BudgetMode::default(),
            seed_default_rows: false,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
