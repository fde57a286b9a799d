//! Claims entity embedded in signed access tokens

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
///
/// The expiration timestamp is fixed at issuance (`iat + validity window`)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display name of the user, denormalized at issuance time
    pub name: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's unique identifier
    /// * `display_name` - The user's display name
    /// * `valid_for` - Validity window added to the issuance time
    pub fn new(user_id: i64, display_name: &str, valid_for: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + valid_for;

        Self {
            sub: user_id.to_string(),
            name: display_name.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expiry_is_issuance_plus_window() {
        let claims = Claims::new(42, "alice", Duration::seconds(900));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.exp, claims.iat + 900);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let claims = Claims::new(42, "alice", Duration::seconds(60));
        assert_eq!(claims.user_id().unwrap(), 42);
    }

    #[test]
    fn test_claims_expiration() {
        let claims = Claims::new(42, "alice", Duration::seconds(-60));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new(7, "bob", Duration::seconds(300));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
