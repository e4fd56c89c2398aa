//! Client configuration.
//!
//! Layered load: built-in defaults, then an optional TOML file, then
//! environment variables with the `WORKBOOK_` prefix.

use crate::error::LifecycleError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the lifecycle client and session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend API.
    pub api_base_url: String,
    /// Per-request timeout for ordinary lifecycle notifications.
    pub request_timeout_ms: u64,
    /// Override for the session persistence file. Defaults to the platform
    /// data directory when unset.
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from an optional file and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, LifecycleError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        builder =
            builder.add_source(config::Environment::with_prefix("WORKBOOK").try_parsing(true));

        let loaded: ClientConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.api_base_url.is_empty() {
            return Err(LifecycleError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(LifecycleError::Config(format!(
                "api_base_url must be an http(s) URL, got: {}",
                self.api_base_url
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(LifecycleError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    // Tests that read or write WORKBOOK_* variables must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvVarGuard {
        key: &'static str,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            Self { key }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            std::env::remove_var(self.key);
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(config.session_file.is_none());
    }

    #[test]
    fn rejects_empty_base_url() {
        let config = ClientConfig {
            api_base_url: String::new(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = ClientConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://api.example.com\"\nrequest_timeout_ms = 2500\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_ms, 2500);
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://file.example.com\"\nrequest_timeout_ms = 2500\n",
        )
        .unwrap();

        let _base = EnvVarGuard::set("WORKBOOK_API_BASE_URL", "https://env.example.com");
        let _timeout = EnvVarGuard::set("WORKBOOK_REQUEST_TIMEOUT_MS", "750");

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.request_timeout_ms, 750);
    }

    #[test]
    fn environment_overrides_apply_without_a_file() {
        let _env = ENV_LOCK.lock();
        let _base = EnvVarGuard::set("WORKBOOK_API_BASE_URL", "https://env.example.com");

        let config = ClientConfig::load(None).unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
