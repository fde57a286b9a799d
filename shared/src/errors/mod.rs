//! Shared error types

use thiserror::Error;

/// Errors produced while assembling or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration value: {field}")]
    MissingValue { field: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
