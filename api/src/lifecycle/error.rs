//! Lifecycle error types

use thiserror::Error;

/// Fatal faults of the serve/shutdown sequence
///
/// Both variants terminate the process with a non-zero exit code; neither
/// goes through the drain phase.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}
