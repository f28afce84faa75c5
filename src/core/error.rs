//! Error types and error handling for the HSTC note service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for HSTC operations
pub type Result<T> = std::result::Result<T, HstcError>;

/// Main error type for the HSTC service
#[derive(Error, Debug)]
pub enum HstcError {
    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Note data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl HstcError {
    /// Shorthand for a validation failure on a named field
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        HstcError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, HstcError::NotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            HstcError::InvalidArgument { .. } | HstcError::ConfigError(_)
        )
    }

    /// Check if the note snapshot could not be produced
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HstcError::DataUnavailable(_))
    }
}
