//! Configuration value objects
//!
//! Configuration is assembled once at startup and passed by reference to the
//! components that need it. There is no process-wide mutable configuration
//! state.
//!
//! - `auth` - JWT signing configuration
//! - `server` - HTTP server and shutdown configuration

pub mod auth;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `.env` if present, then the process environment. Unset values
    /// fall back to the per-section defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Validate the assembled configuration
    ///
    /// # Returns
    ///
    /// `Ok(())` if every section is usable, the first `ConfigError` otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.jwt.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_validates_sections() {
        let config = AppConfig {
            server: ServerConfig::default(),
            jwt: JwtConfig::new("unit-test-secret"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_config_rejects_bad_jwt_section() {
        let mut config = AppConfig {
            server: ServerConfig::default(),
            jwt: JwtConfig::new("unit-test-secret"),
        };
        config.jwt.secret = String::new();
        assert!(config.validate().is_err());
    }
}
