//! Core types for workspace session-lifecycle coordination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque workspace identifier assigned by the backend.
///
/// The backend generates short unique ids; the client never inspects their
/// structure, it only carries them between the route and the lifecycle calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The application's navigable location at a point in time.
///
/// Immutable value produced once per committed navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnapshot {
    /// Route path, including any query string or fragment.
    pub path: String,
    /// Wall-clock time the snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

impl RouteSnapshot {
    pub fn now(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One navigation event: an ordered pair of route snapshots.
#[derive(Debug, Clone)]
pub struct Transition {
    pub previous: RouteSnapshot,
    pub current: RouteSnapshot,
}
