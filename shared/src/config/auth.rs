//! JWT authentication configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in seconds
    #[serde(default = "default_expires")]
    pub expires: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires: default_expires(),
        }
    }

    /// Set the token validity window in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expires = minutes * 60;
        self
    }

    /// Load from environment variables (`JWT_SECRET`, `JWT_EXPIRES`)
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        let expires = std::env::var("JWT_EXPIRES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expires);

        Self { secret, expires }
    }

    /// Validate the configuration
    ///
    /// The secret must be non-empty and the validity window positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingValue {
                field: "jwt.secret".to_string(),
            });
        }
        if self.expires <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "jwt.expires".to_string(),
                reason: format!("must be a positive number of seconds, got {}", self.expires),
            });
        }
        Ok(())
    }
}

fn default_expires() -> i64 {
    900 // 15 minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_minutes(30);
        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.expires, 1800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_rejects_empty_secret() {
        let config = JwtConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_jwt_config_rejects_non_positive_expiry() {
        let mut config = JwtConfig::new("secret");
        config.expires = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.expires = -60;
        assert!(config.validate().is_err());
    }
}
