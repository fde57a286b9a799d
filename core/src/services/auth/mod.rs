//! Authentication service module
//!
//! Turns a credential check, delegated to the user-lookup collaborator,
//! into a signed access token.

mod service;


pub use service::AuthService;
