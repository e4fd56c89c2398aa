//! Navigation Observer
//!
//! Observes the application's current route and reports each committed
//! transition, exactly once and in order, to a single registered handler.
//! Workspace membership is derived from the path shape, never stored.

use crate::types::{RouteSnapshot, Transition, WorkspaceId};

/// Whether a route snapshot is inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    Outside,
    Inside(WorkspaceId),
}

/// Classify a snapshot by its path shape.
///
/// A snapshot is inside workspace `W` iff the path is exactly
/// `/workbook/<W>` with a non-empty id. Query strings, fragments, and a
/// trailing slash are ignored. Everything else is outside.
pub fn classify(snapshot: &RouteSnapshot) -> Membership {
    let path = snapshot
        .path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["workbook", id] => Membership::Inside(WorkspaceId::from(*id)),
        _ => Membership::Outside,
    }
}

type TransitionHandler = Box<dyn FnMut(&Transition) + Send>;

/// Single-consumer route observer.
///
/// Holds the current snapshot and forwards each `navigate` call to the
/// registered handler as a `(previous, current)` pair, synchronously, in
/// call order. No batching, no reordering.
pub struct NavigationObserver {
    current: RouteSnapshot,
    handler: Option<TransitionHandler>,
}

impl NavigationObserver {
    /// Start observing at `initial_path`. No transition is emitted for the
    /// initial snapshot; a deep link is simply the first `current`.
    pub fn new(initial_path: &str) -> Self {
        Self {
            current: RouteSnapshot::now(initial_path),
            handler: None,
        }
    }

    /// Register the transition handler, replacing any previous one.
    pub fn on_transition(&mut self, handler: TransitionHandler) {
        self.handler = Some(handler);
    }

    /// The snapshot of the route currently displayed.
    pub fn current(&self) -> &RouteSnapshot {
        &self.current
    }

    /// Commit a navigation to `path` and notify the handler once.
    pub fn navigate(&mut self, path: &str) {
        let next = RouteSnapshot::now(path);
        let transition = Transition {
            previous: self.current.clone(),
            current: next.clone(),
        };
        self.current = next;
        if let Some(handler) = self.handler.as_mut() {
            handler(&transition);
        }
    }
}
