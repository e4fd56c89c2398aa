//! Logging System
//!
//! Structured logging via the `tracing` crate. Library code only emits
//! events; the embedding application decides whether to install the
//! subscriber built here.

use crate::error::LifecycleError;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// Filter precedence: `WORKBOOK_LOG` env var, then `default_level`.
pub fn init_logging(default_level: &str) -> Result<(), LifecycleError> {
    let filter = EnvFilter::try_from_env("WORKBOOK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| LifecycleError::Config(format!("failed to initialize logging: {}", e)))
}
