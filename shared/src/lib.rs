//! Shared utilities and common types for the blog auth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration value objects
//! - Error types and response structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, JwtConfig, ServerConfig};
pub use errors::ConfigError;
pub use types::ErrorResponse;
