//! Error handling for the bakery production engine
//!
//! The unchecked calculators degrade to zero values rather than fail, so
//! the only errors this crate produces come from the hardened `_checked`
//! entry points and from configuration loading.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl EngineError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine entry points
pub type EngineResult<T> = Result<T, EngineError>;
