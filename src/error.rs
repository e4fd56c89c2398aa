//! Error taxonomy for the session-lifecycle coordinator.
//!
//! Lifecycle notification failures are caught at the dispatch boundary,
//! logged, and swallowed; they never propagate back into navigation handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Request failed or the backend returned an error status.
    #[error("network error: {0}")]
    Network(String),

    /// Session storage read/write failure.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration load or validation failure.
    #[error("config error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for LifecycleError {
    fn from(e: config::ConfigError) -> Self {
        LifecycleError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for LifecycleError {
    fn from(e: serde_json::Error) -> Self {
        LifecycleError::Storage(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    }
}
