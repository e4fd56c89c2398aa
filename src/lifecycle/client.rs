//! Lifecycle Client
//!
//! Thin request boundary for the open/exit notifications. Both calls are
//! idempotent from the caller's perspective; the backend is the single
//! source of truth for "currently open". The session credential rides as an
//! ambient cookie on the shared HTTP client and is never attached here.

use crate::config::ClientConfig;
use crate::error::LifecycleError;
use crate::types::WorkspaceId;
use async_trait::async_trait;
use std::time::Duration;

/// Opaque backend acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

#[async_trait]
pub trait LifecycleClient: Send + Sync {
    /// Tell the backend this tab is now working inside `workspace`. Safe to
    /// call when a workspace is already open server-side (overwrite
    /// semantics).
    async fn open_workspace(&self, workspace: &WorkspaceId) -> Result<Ack, LifecycleError>;

    /// Tell the backend this tab is no longer inside any workspace. Safe to
    /// call when nothing is open.
    async fn exit_workspace(&self) -> Result<Ack, LifecycleError>;
}

/// reqwest-backed client against the backend's `/folder` endpoints.
pub struct HttpLifecycleClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLifecycleClient {
    pub fn new(config: &ClientConfig) -> Result<Self, LifecycleError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| LifecycleError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn open_request(&self, workspace: &WorkspaceId) -> reqwest::RequestBuilder {
        self.http
            .post(self.endpoint("/folder/open"))
            .query(&[("folderId", workspace.as_str())])
    }

    fn exit_request(&self) -> reqwest::RequestBuilder {
        self.http.post(self.endpoint("/folder/exitFolder"))
    }
}

#[async_trait]
impl LifecycleClient for HttpLifecycleClient {
    async fn open_workspace(&self, workspace: &WorkspaceId) -> Result<Ack, LifecycleError> {
        let response = self
            .open_request(workspace)
            .send()
            .await
            .map_err(|e| LifecycleError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(Ack)
        } else {
            Err(LifecycleError::Network(format!(
                "open workspace {} returned {}",
                workspace,
                response.status()
            )))
        }
    }

    async fn exit_workspace(&self) -> Result<Ack, LifecycleError> {
        let response = self
            .exit_request()
            .send()
            .await
            .map_err(|e| LifecycleError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(Ack)
        } else {
            Err(LifecycleError::Network(format!(
                "exit workspace returned {}",
                response.status()
            )))
        }
    }
}
