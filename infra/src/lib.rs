//! Infrastructure layer for the blog auth service
//!
//! Concrete implementations of the core's collaborator interfaces. The only
//! collaborator the auth service consumes is the user service, reached over
//! HTTP.

pub mod services;

pub use services::user_client::HttpUserLookup;
