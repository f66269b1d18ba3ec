//! Application state shared by all handlers.
//!
//! [`AppState`] owns the [`StatusStore`] and the [`DeviceStore`] behind
//! `Arc`s, so each router built from a fresh state gets its own isolated
//! cells.

use std::sync::Arc;

use lockrelay_core::StatusLabel;

use crate::config::ServerConfig;
use crate::device::DeviceStore;
use crate::store::StatusStore;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The current lock request.
    pub store: Arc<StatusStore>,
    /// What the lock bridge last reported.
    pub device: Arc<DeviceStore>,
}

impl AppState {
    /// Creates state whose store starts at `initial`.
    pub fn new(initial: StatusLabel) -> Self {
        AppState {
            store: Arc::new(StatusStore::new(initial)),
            device: Arc::new(DeviceStore::default()),
        }
    }

    /// Creates state from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.initial_status)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StatusLabel::default())
    }
}
