//! Configuration for the token manager

use blog_shared::config::JwtConfig;
use chrono::Duration;

/// Configuration for the token manager
///
/// Both values are fixed at construction; the manager never mutates them.
#[derive(Debug, Clone)]
pub struct TokenManagerConfig {
    /// JWT signing secret
    pub secret: String,
    /// Token validity window
    pub expires: Duration,
}

impl TokenManagerConfig {
    /// Create a new configuration
    pub fn new(secret: impl Into<String>, expires_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expires: Duration::seconds(expires_secs),
        }
    }
}

impl From<&JwtConfig> for TokenManagerConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), config.expires)
    }
}
