//! Mock implementation of UserLookup for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::VerifiedUser;
use crate::errors::LookupError;

use super::trait_::UserLookup;

struct MockAccount {
    id: i64,
    display_name: String,
    password: String,
}

/// Mock user lookup for testing
///
/// Holds accounts in memory and can be switched into an unavailable state
/// to exercise the transport-failure path.
pub struct MockUserLookup {
    accounts: Arc<RwLock<HashMap<String, MockAccount>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockUserLookup {
    /// Create a new empty mock lookup
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register an account that will authenticate successfully
    pub async fn add_account(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        id: i64,
        display_name: impl Into<String>,
    ) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(
            username.into(),
            MockAccount {
                id,
                display_name: display_name.into(),
                password: password.into(),
            },
        );
    }

    /// Make every subsequent call fail with `LookupError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl Default for MockUserLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserLookup for MockUserLookup {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, LookupError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LookupError::Unavailable {
                message: "mock lookup marked unavailable".to_string(),
            });
        }

        let accounts = self.accounts.read().await;
        let account = accounts.get(username).ok_or(LookupError::NotFound)?;

        if account.password != password {
            return Err(LookupError::InvalidCredentials);
        }

        Ok(VerifiedUser::new(account.id, account.display_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lookup_outcomes() {
        let lookup = MockUserLookup::new();
        lookup.add_account("alice", "correct-pw", 42, "alice").await;

        let user = lookup.authenticate("alice", "correct-pw").await.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.display_name, "alice");

        assert!(matches!(
            lookup.authenticate("alice", "wrong-pw").await,
            Err(LookupError::InvalidCredentials)
        ));
        assert!(matches!(
            lookup.authenticate("nobody", "pw").await,
            Err(LookupError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_mock_lookup_unavailable() {
        let lookup = MockUserLookup::new();
        lookup.set_unavailable(true);

        assert!(matches!(
            lookup.authenticate("alice", "pw").await,
            Err(LookupError::Unavailable { .. })
        ));
    }
}
