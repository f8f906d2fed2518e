//! API credential handling
//!
//! The Gemini key is read from the environment (or prompted for) and kept in
//! a buffer that is zeroed on drop. It is never printed or logged.

use std::fmt;
use std::io::IsTerminal;

use zeroize::Zeroizing;

use crate::error::{BudgetError, BudgetResult};

/// Environment variables checked for the key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// The credential used to reach the AI service
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Wrap a key, rejecting blank input
    pub fn new(key: impl Into<String>) -> BudgetResult<Self> {
        let key = Zeroizing::new(key.into());
        if key.trim().is_empty() {
            return Err(BudgetError::MissingApiKey);
        }
        Ok(Self(Zeroizing::new(key.trim().to_string())))
    }

    /// Look the key up in the environment
    pub fn from_env() -> Option<Self> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|value| Self::new(value).ok())
    }

    /// Environment first, then a hidden prompt when stdin is a terminal
    pub fn resolve() -> BudgetResult<Self> {
        if let Some(key) = Self::from_env() {
            return Ok(key);
        }

        if !std::io::stdin().is_terminal() {
            return Err(BudgetError::MissingApiKey);
        }

        let entered = rpassword::prompt_password("Gemini API key: ")
            .map_err(|e| BudgetError::Config(format!("Failed to read API key: {}", e)))?;
        Self::new(entered)
    }

    /// Get the key for use in a request header
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

// Don't print the key in Debug output
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey").field("len", &self.0.len()).finish()
    }
}
