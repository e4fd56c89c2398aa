//! Unload Fallback
//!
//! Safety net for transitions the Navigation Observer never gets to process:
//! when the host is being discarded, a best-effort exit notification is
//! attempted regardless of what the state machine thinks, over a transport
//! that does not need the host event loop to stay alive.

use crate::config::ClientConfig;
use crate::lifecycle::controller::SessionLifecycleController;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Host capability: a "this host is about to be discarded" signal.
///
/// A browser shell backs this with its unload event; process hosts can use
/// [`ShutdownSignal`]. The callback may fire at most once.
pub trait ExitSignal: Send + Sync {
    fn register_best_effort_exit(&self, callback: Box<dyn Fn() + Send + Sync>);
}

/// Transport for the guaranteed-attempt exit notification. Must return
/// without blocking and without awaiting delivery.
pub trait ExitBeacon: Send + Sync {
    fn send_exit(&self);
}

/// Beacon that posts `/folder/exitFolder` from a detached OS thread, so
/// delivery does not depend on the async runtime surviving teardown.
pub struct HttpExitBeacon {
    endpoint: String,
    timeout: Duration,
}

impl HttpExitBeacon {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: format!(
                "{}/folder/exitFolder",
                config.api_base_url.trim_end_matches('/')
            ),
            timeout: Duration::from_millis(config.request_timeout_ms.min(2_000)),
        }
    }
}

impl ExitBeacon for HttpExitBeacon {
    fn send_exit(&self) {
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;
        std::thread::spawn(move || {
            let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
                Ok(client) => client,
                Err(e) => {
                    warn!("Exit beacon client build failed: {}", e);
                    return;
                }
            };
            if let Err(e) = client.post(&endpoint).send() {
                warn!("Exit beacon delivery failed: {}", e);
            }
        });
    }
}

/// `ExitSignal` backed by the process interrupt signal.
pub struct ShutdownSignal;

impl ExitSignal for ShutdownSignal {
    fn register_best_effort_exit(&self, callback: Box<dyn Fn() + Send + Sync>) {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => callback(),
                Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
            }
        });
    }
}

/// Registration glue between a host signal and the exit beacon.
pub struct UnloadFallback;

impl UnloadFallback {
    /// Register the best-effort exit and clear any stale server-side open
    /// state left over from a previous crashed session.
    ///
    /// The beacon fires on the signal regardless of the controller's current
    /// state; a redundant exit is acknowledged as a no-op by the backend.
    pub fn install(
        signal: &dyn ExitSignal,
        beacon: Arc<dyn ExitBeacon>,
        controller: &SessionLifecycleController,
    ) {
        signal.register_best_effort_exit(Box::new(move || {
            debug!("Host discard signal received, sending exit beacon");
            beacon.send_exit();
        }));
        controller.startup_clear();
    }
}
