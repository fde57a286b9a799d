//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token verification and generation errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,
}

/// Outcomes of the external user-lookup collaborator
///
/// `NotFound` and `InvalidCredentials` are distinguished here so the
/// collaborator contract stays honest, but the authentication service
/// collapses both into a single unauthenticated outcome before anything
/// reaches a caller.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User lookup unavailable: {message}")]
    Unavailable { message: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Authentication failed")]
    Unauthenticated,

    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to token-specific errors
    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
