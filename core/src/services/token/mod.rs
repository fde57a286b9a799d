//! Token manager module for JWT handling
//!
//! This module handles signed access tokens:
//! - HS256 token generation from a verified identity
//! - Verification with deterministic expiry (zero leeway)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenManagerConfig;
pub use service::TokenManager;
