//! The shared status cell.
//!
//! [`StatusStore`] holds the single current [`StatusLabel`] behind a
//! `tokio::sync::RwLock`, so every read and write from concurrent handler
//! tasks is totally ordered. Guards are never held across another `.await`.

use lockrelay_core::StatusLabel;
use tokio::sync::RwLock;

/// Process-lifetime holder of the current lock request.
#[derive(Debug, Default)]
pub struct StatusStore {
    current: RwLock<StatusLabel>,
}

impl StatusStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: StatusLabel) -> Self {
        StatusStore {
            current: RwLock::new(initial),
        }
    }

    /// Returns the current status.
    pub async fn get(&self) -> StatusLabel {
        *self.current.read().await
    }

    /// Overwrites the current status and returns the previous one.
    pub async fn set(&self, status: StatusLabel) -> StatusLabel {
        let mut current = self.current.write().await;
        std::mem::replace(&mut *current, status)
    }

    /// Clears the request back to [`StatusLabel::None`].
    pub async fn reset(&self) -> StatusLabel {
        self.set(StatusLabel::None).await
    }
}
