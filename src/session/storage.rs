//! Durable client storage for the session entry.

use super::Session;
use crate::config::ClientConfig;
use crate::error::LifecycleError;
use std::path::PathBuf;
use tracing::warn;

/// Persistence seam for the session store.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Option<Session>, LifecycleError>;
    /// `None` removes the stored entry.
    fn save(&self, session: Option<&Session>) -> Result<(), LifecycleError>;
}

/// JSON-file-backed storage under the platform data directory.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the storage location from configuration: the configured
    /// override when set, the platform data directory otherwise.
    pub fn from_config(config: &ClientConfig) -> Result<Self, LifecycleError> {
        let path = match &config.session_file {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };
        Ok(Self::new(path))
    }

    /// Resolve the default session file in the platform data directory.
    pub fn default_path() -> Result<PathBuf, LifecycleError> {
        let project_dirs = directories::ProjectDirs::from("", "workbook", "workbook")
            .ok_or_else(|| {
                LifecycleError::Config(
                    "Could not determine platform data directory for session storage".to_string(),
                )
            })?;
        Ok(project_dirs.data_dir().join("session.json"))
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<Session>, LifecycleError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt entry is treated as logged out rather than a
                // startup failure.
                warn!("Discarding unreadable session entry {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn save(&self, session: Option<&Session>) -> Result<(), LifecycleError> {
        match session {
            Some(session) => {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let content = serde_json::to_string_pretty(session)?;
                std::fs::write(&self.path, content)?;
            }
            None => match std::fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }
}
