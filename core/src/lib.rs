//! # Blog Auth Core
//!
//! Core business logic and domain layer for the blog auth service.
//! This crate contains the claims entity, the token manager, the
//! authentication service, the user-lookup collaborator interface,
//! and the error types shared by all of them.

pub mod domain;
pub mod errors;
pub mod lookup;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use lookup::*;
pub use services::*;
