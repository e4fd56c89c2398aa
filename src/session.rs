//! Session Store
//!
//! Process-wide holder of the authenticated identity for the current client
//! session, hydrated once from durable storage at startup and torn down
//! explicitly on logout. No network side effects anywhere in this module.

pub mod storage;

use crate::error::LifecycleError;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use storage::SessionStorage;
use tracing::info;

/// Authenticated identity for the current client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account identity, typically an email address.
    pub identity: String,
    /// Session credential; cleared on logout.
    pub token: Option<String>,
    /// Name shown in the header/profile surfaces.
    pub display_name: String,
}

type Subscriber = Box<dyn Fn(Option<&Session>) + Send + Sync>;

/// Store with explicit init and teardown rules.
///
/// `init` hydrates from storage; `set_session` persists first and then
/// notifies subscribers synchronously, in registration order.
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    storage: Box<dyn SessionStorage>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SessionStore {
    /// Hydrate the store from persistent storage.
    pub fn init(storage: Box<dyn SessionStorage>) -> Result<Self, LifecycleError> {
        let current = storage.load()?;
        if current.is_some() {
            info!("Restored session from storage");
        }
        Ok(Self {
            current: RwLock::new(current),
            storage,
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Current session, if any.
    pub fn session(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// Replace the current session. `None` clears both the in-memory state
    /// and the storage entry.
    pub fn set_session(&self, session: Option<Session>) -> Result<(), LifecycleError> {
        self.storage.save(session.as_ref())?;
        *self.current.write() = session.clone();
        for subscriber in self.subscribers.lock().iter() {
            subscriber(session.as_ref());
        }
        Ok(())
    }

    /// Profile-edit path: update the display name of the current session.
    /// No-op when logged out.
    pub fn update_profile(&self, display_name: &str) -> Result<(), LifecycleError> {
        let updated = match self.session() {
            Some(mut session) => {
                session.display_name = display_name.to_string();
                Some(session)
            }
            None => return Ok(()),
        };
        self.set_session(updated)
    }

    /// Teardown: clear the token, the in-memory state, and the storage entry.
    pub fn logout(&self) -> Result<(), LifecycleError> {
        info!("Clearing session");
        self.set_session(None)
    }

    /// Register a synchronous observer of session changes.
    pub fn subscribe(&self, subscriber: Subscriber) {
        self.subscribers.lock().push(subscriber);
    }
}
