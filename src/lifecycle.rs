//! Session Lifecycle Coordination
//!
//! The controller decides, on each navigation transition, whether an open or
//! exit notification must reach the backend; the client issues the calls;
//! the unload fallback guarantees an exit attempt when the host is being
//! discarded and an ordinary request cannot be relied on to complete.

pub mod client;
pub mod controller;
pub mod unload;

use crate::route::NavigationObserver;
use self::controller::SessionLifecycleController;
use parking_lot::Mutex;
use std::sync::Arc;

/// Wire a controller as the observer's transition handler.
pub fn attach_controller(
    observer: &mut NavigationObserver,
    controller: Arc<Mutex<SessionLifecycleController>>,
) {
    observer.on_transition(Box::new(move |transition| {
        controller.lock().handle_transition(transition);
    }));
}
