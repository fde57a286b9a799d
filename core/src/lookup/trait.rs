//! User lookup trait defining the credential verification interface.

use async_trait::async_trait;

use crate::domain::entities::user::VerifiedUser;
use crate::errors::LookupError;

/// Collaborator trait for verifying a username/password pair
///
/// Implementations own their own transport and concurrency; every call is
/// independent. The pair is transient: implementations must never persist
/// or log it.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Verify a credential pair against stored identities
    ///
    /// # Arguments
    /// * `username` - The username supplied by the caller
    /// * `password` - The plaintext password supplied by the caller
    ///
    /// # Returns
    /// * `Ok(VerifiedUser)` - Credentials match a stored identity
    /// * `Err(LookupError::NotFound)` - No such user
    /// * `Err(LookupError::InvalidCredentials)` - User exists, password wrong
    /// * `Err(LookupError::Unavailable)` - The lookup backend is unreachable
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, LookupError>;
}
