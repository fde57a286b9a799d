//! Serve/drain/stop sequence for the HTTP server

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev;

use super::error::LifecycleError;
use super::shutdown::{Shutdown, ShutdownState};
use super::signals;

/// Owner of the serve loop and the graceful-shutdown state machine
///
/// Runs the already-bound server concurrently with a signal wait. On the
/// first trigger the listener stops accepting, in-flight requests drain,
/// and the process stops when either the drain completes or the deadline
/// elapses, whichever comes first. A serve-loop fault without a trigger is
/// fatal and bypasses the drain phase.
pub struct ServerLifecycle {
    server: dev::Server,
    grace: Duration,
    shutdown: Arc<Shutdown>,
}

impl ServerLifecycle {
    /// Create a lifecycle around a bound server
    ///
    /// # Arguments
    ///
    /// * `server` - The bound server, built with signals disabled and its
    ///   internal shutdown timeout matching `grace`
    /// * `grace` - Drain deadline armed on entry to `Draining`
    pub fn new(server: dev::Server, grace: Duration) -> Self {
        Self {
            server,
            grace,
            shutdown: Arc::new(Shutdown::new()),
        }
    }

    /// Handle to the shutdown coordinator, for observers and tests
    pub fn shutdown(&self) -> Arc<Shutdown> {
        self.shutdown.clone()
    }

    /// Serve until shutdown completes or a fatal fault occurs
    ///
    /// # Returns
    ///
    /// * `Ok(())` - `Stopped` was reached via either drain path; the
    ///   process should exit 0
    /// * `Err(LifecycleError::Serve)` - The serve loop failed on its own;
    ///   nothing was drained
    pub async fn run(self) -> Result<(), LifecycleError> {
        let shutdown = self.shutdown;
        let handle = self.server.handle();

        // Translate OS signals into the shutdown trigger without blocking
        // the serve loop.
        let signal_shutdown = shutdown.clone();
        tokio::spawn(async move {
            signals::shutdown_signal().await;
            log::info!("interrupt received, starting graceful shutdown");
            signal_shutdown.trigger();
        });

        let mut serve_task = tokio::spawn(self.server);

        tokio::select! {
            result = &mut serve_task => {
                shutdown.set_state(ShutdownState::Stopped);
                return match result {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(LifecycleError::Serve(e)),
                    Err(e) => Err(LifecycleError::Serve(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        e,
                    ))),
                };
            }
            _ = shutdown.triggered() => {}
        }

        shutdown.set_state(ShutdownState::Draining);
        log::info!(
            "draining: refusing new connections, allowing up to {:?} for in-flight requests",
            self.grace
        );

        // First of two completions: all in-flight requests finish, or the
        // deadline fires and anything still running is abandoned.
        tokio::select! {
            _ = handle.stop(true) => {
                log::info!("in-flight requests drained");
            }
            _ = tokio::time::sleep(self.grace) => {
                log::warn!("drain deadline elapsed, abandoning in-flight requests");
            }
        }

        shutdown.set_state(ShutdownState::Stopped);
        serve_task.abort();
        Ok(())
    }
}
