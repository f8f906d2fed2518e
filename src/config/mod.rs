//! Configuration module for Budget Boss
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - API credential lookup

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::ApiKey;
pub use paths::BudgetPaths;
pub use settings::Settings;
