//! Authentication service implementation

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult, LookupError};
use crate::lookup::UserLookup;
use crate::services::token::TokenManager;

/// Authentication service exposing the login operation
///
/// Holds no state of its own; every call is independent and safe to run
/// concurrently with any number of other calls.
pub struct AuthService<L: UserLookup> {
    /// External collaborator that verifies credential pairs
    user_lookup: Arc<L>,
    /// Token manager for signing claims
    token_manager: Arc<TokenManager>,
}

impl<L: UserLookup> AuthService<L> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_lookup` - Collaborator that verifies credential pairs
    /// * `token_manager` - Manager that signs claims for verified users
    pub fn new(user_lookup: Arc<L>, token_manager: Arc<TokenManager>) -> Self {
        Self {
            user_lookup,
            token_manager,
        }
    }

    /// Authenticate a credential pair and issue a signed token
    ///
    /// Unknown user and wrong password are deliberately indistinguishable in
    /// the returned error so callers learn nothing about account existence.
    /// The credential pair is never logged or persisted.
    ///
    /// # Arguments
    ///
    /// * `username` - The username supplied by the caller
    /// * `password` - The plaintext password supplied by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A signed token for the verified user
    /// * `Err(DomainError::Unauthenticated)` - Credential check failed
    /// * `Err(DomainError::Unavailable)` - Collaborator unreachable; no retry
    ///   is performed here
    /// * `Err(DomainError::Internal)` - Token signing fault
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<String> {
        let user = match self.user_lookup.authenticate(username, password).await {
            Ok(user) => user,
            Err(LookupError::NotFound) | Err(LookupError::InvalidCredentials) => {
                tracing::debug!("login rejected by user lookup");
                return Err(DomainError::Unauthenticated);
            }
            Err(LookupError::Unavailable { message }) => {
                tracing::warn!(error = %message, "user lookup unavailable");
                return Err(DomainError::Unavailable { message });
            }
        };

        let token = self.token_manager.generate(user.id, &user.display_name)?;
        tracing::debug!(user_id = user.id, "issued access token");
        Ok(token)
    }
}
