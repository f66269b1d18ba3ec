//! Last report from the lock bridge and the pending report request.
//!
//! The admin page can ask the bridge to report; the bridge sees the request
//! as the `status` command on `/get-command` and answers on `/report`.
//! Receiving any report clears the request.

use lockrelay_core::DeviceReport;
use tokio::sync::RwLock;

/// A report together with when it arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceivedReport {
    pub report: DeviceReport,
    /// Seconds since the Unix epoch.
    pub received_at: u64,
}

/// Point-in-time copy of the bridge state, for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceSnapshot {
    pub last_report: Option<ReceivedReport>,
    pub report_requested: bool,
}

#[derive(Debug, Default)]
pub struct DeviceStore {
    inner: RwLock<DeviceSnapshot>,
}

impl DeviceStore {
    pub async fn snapshot(&self) -> DeviceSnapshot {
        *self.inner.read().await
    }

    /// Stores `report` as the latest one and clears any pending request.
    pub async fn record(&self, report: DeviceReport) -> ReceivedReport {
        let received = ReceivedReport {
            report,
            received_at: unix_seconds(),
        };
        let mut inner = self.inner.write().await;
        inner.last_report = Some(received);
        inner.report_requested = false;
        received
    }

    /// Marks a report as wanted. Returns whether one was already pending.
    pub async fn request_report(&self) -> bool {
        let mut inner = self.inner.write().await;
        std::mem::replace(&mut inner.report_requested, true)
    }

    pub async fn report_requested(&self) -> bool {
        self.inner.read().await.report_requested
    }
}

fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
