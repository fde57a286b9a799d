//! Token manager implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::claims::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenManagerConfig;

/// Stateless manager for signed access tokens
///
/// Holds the shared secret and validity window for its whole lifetime;
/// generation and verification are pure functions of the input token and
/// the current time, so concurrent use needs no locking.
pub struct TokenManager {
    config: TokenManagerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenManager {
    /// Creates a new token manager
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret and validity window
    pub fn new(config: TokenManagerConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        // Zero leeway so a token becomes unverifiable the instant wall-clock
        // time passes its expiration.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed token for a verified user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's unique identifier
    /// * `display_name` - The user's display name, embedded as-is
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError::Internal)` - Encoding or signing fault
    pub fn generate(&self, user_id: i64, display_name: &str) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, display_name, self.config.expires);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("token encoding failed: {e}"),
            }
        })
    }

    /// Verifies a token and returns the embedded claims
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The claims, returned unchanged
    /// * `Err(TokenError::Expired)` - Valid signature, past expiration
    /// * `Err(TokenError::InvalidSignature)` - Signature mismatch
    /// * `Err(TokenError::Malformed)` - Structurally invalid token
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        Ok(token_data.claims)
    }
}
