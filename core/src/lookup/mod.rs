//! User-lookup collaborator interface
//!
//! The auth service never checks passwords itself; credential verification
//! is delegated to an external user service behind the [`UserLookup`]
//! trait. Transports live in the infrastructure layer.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockUserLookup;
pub use r#trait::UserLookup;
