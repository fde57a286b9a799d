//! Verified user identity returned by the user-lookup collaborator

use serde::{Deserialize, Serialize};

/// Identity of a user whose credentials have been verified
///
/// The display name is denormalized into the token at issuance time and is
/// not refreshed for the lifetime of the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    /// Unique user identifier
    pub id: i64,

    /// Human-readable display name
    pub display_name: String,
}

impl VerifiedUser {
    /// Create a new verified user identity
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
