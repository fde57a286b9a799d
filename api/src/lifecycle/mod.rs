//! Lifecycle management for the RPC server process
//!
//! ```text
//! Startup:
//!     Load config -> Validate -> Bind listener -> Serve + wait for signal
//!
//! Shutdown:
//!     Signal received -> Draining (stop accepting, drain in-flight,
//!     deadline armed) -> Stopped (drained or deadline, whichever first)
//! ```
//!
//! The drain deadline is the sole timeout; it is fixed at startup.

mod error;
mod server;
mod shutdown;
pub mod signals;

pub use error::LifecycleError;
pub use server::ServerLifecycle;
pub use shutdown::{Shutdown, ShutdownState};
