//! Custom error types for Budget Boss
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Budget Boss operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Form input rejected before anything is sent
    #[error(transparent)]
    Validation(#[from] crate::services::validator::ValidationError),

    /// No credential available for the AI service
    #[error("No API key configured. Set GEMINI_API_KEY (or API_KEY) and try again.")]
    MissingApiKey,

    /// Transport-level failure talking to the AI service
    #[error("HTTP error: {0}")]
    Http(String),

    /// The AI service answered with a non-success status
    #[error("AI service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The AI service answered, but not with a usable plan
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A plan request ended in an error, already worded for display
    #[error("{0}")]
    PlanFailed(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure came from the AI service round trip
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::MalformedResponse(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for BudgetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Http("request timed out".into())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for Budget Boss operations
pub type BudgetResult<T> = Result<T, BudgetError>;
