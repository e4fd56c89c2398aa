//! Session Lifecycle Controller
//!
//! State machine deciding whether each navigation transition must notify the
//! backend. Notifications are fire-and-observe: each call is handed to the
//! runtime without awaiting completion, failures are logged and swallowed,
//! and no in-flight call is ever cancelled by a later transition.
//!
//! Calls triggered by different transitions are not sequenced behind each
//! other, so they may land at the backend out of emission order. Workspace
//! occupancy is soft advisory state, not a lock; the weaker contract is
//! deliberate and documented rather than papered over client-side.

use crate::lifecycle::client::LifecycleClient;
use crate::route::{classify, Membership};
use crate::types::{Transition, WorkspaceId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle state for this tab. At most one workspace is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Dormant,
    Active(WorkspaceId),
}

/// Owns the lifecycle state and the activation flag; nothing else may
/// mutate either.
pub struct SessionLifecycleController {
    state: LifecycleState,
    activated: bool,
    client: Arc<dyn LifecycleClient>,
}

impl SessionLifecycleController {
    pub fn new(client: Arc<dyn LifecycleClient>) -> Self {
        Self {
            state: LifecycleState::Dormant,
            activated: false,
            client,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Set the activation flag. Called once by the host after its first full
    /// mount pass; until then every transition is suppressed, so the
    /// synthetic `previous == current` comparison at startup can never emit
    /// a spurious exit.
    pub fn activate(&mut self) {
        self.activated = true;
    }

    /// Apply one committed navigation transition.
    ///
    /// Cross-workspace jumps dispatch exit before open in program order,
    /// without awaiting the exit's completion.
    pub fn handle_transition(&mut self, transition: &Transition) {
        if !self.activated {
            debug!(
                from = %transition.previous.path,
                to = %transition.current.path,
                "Transition before activation, suppressed"
            );
            return;
        }

        let from = classify(&transition.previous);
        let to = classify(&transition.current);

        match (from, to) {
            (Membership::Outside, Membership::Inside(workspace)) => {
                self.state = LifecycleState::Active(workspace.clone());
                self.dispatch_open(workspace);
            }
            (Membership::Inside(_), Membership::Outside) => {
                self.dispatch_exit();
                self.state = LifecycleState::Dormant;
            }
            (Membership::Inside(was), Membership::Inside(now)) => {
                if was != now {
                    self.dispatch_exit();
                    self.state = LifecycleState::Active(now.clone());
                    self.dispatch_open(now);
                }
            }
            (Membership::Outside, Membership::Outside) => {}
        }
    }

    /// Fire-and-observe exit used once at startup to clear any stale
    /// server-side open state left by a previous crashed session.
    pub fn startup_clear(&self) {
        debug!("Dispatching startup exit to clear stale open state");
        self.dispatch_exit();
    }

    fn dispatch_open(&self, workspace: WorkspaceId) {
        let Some(runtime) = Self::runtime() else {
            warn!(workspace = %workspace, "No async runtime, dropping open notification");
            return;
        };
        debug!(workspace = %workspace, "Dispatching open notification");
        let client = Arc::clone(&self.client);
        runtime.spawn(async move {
            if let Err(e) = client.open_workspace(&workspace).await {
                warn!(workspace = %workspace, "Open notification failed: {}", e);
            }
        });
    }

    fn dispatch_exit(&self) {
        let Some(runtime) = Self::runtime() else {
            warn!("No async runtime, dropping exit notification");
            return;
        };
        debug!("Dispatching exit notification");
        let client = Arc::clone(&self.client);
        runtime.spawn(async move {
            if let Err(e) = client.exit_workspace().await {
                warn!("Exit notification failed: {}", e);
            }
        });
    }

    /// A mis-wired host must never see navigation break on a lifecycle
    /// notification, so a missing runtime downgrades to a logged drop.
    fn runtime() -> Option<tokio::runtime::Handle> {
        tokio::runtime::Handle::try_current().ok()
    }
}
