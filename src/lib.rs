//! Workbook Session: Workspace Session-Lifecycle Coordination
//!
//! Keeps the backend's notion of "which workspace this tab currently has open"
//! synchronized with the client application's navigation state, across in-app
//! route changes, reloads, and tab/host shutdown.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod route;
pub mod session;
pub mod types;
