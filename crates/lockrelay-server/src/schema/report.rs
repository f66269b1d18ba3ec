//! Schema for the report the lock bridge posts back.

use lockrelay_core::{CoreError, DeviceReport};

use super::first_value;

/// Body of `POST /report`: `status=lock=1,in_unlock=0,...`.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub status: Option<String>,
}

impl ReportForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        ReportForm {
            status: first_value(pairs, "status"),
        }
    }

    /// Parses the report line. Unlike the admin form, a missing field is an
    /// error: there is nothing to record.
    pub fn report(&self) -> Result<DeviceReport, CoreError> {
        match self.status.as_deref() {
            Some(line) => line.parse(),
            None => Err(CoreError::InvalidReport {
                value: String::new(),
                reason: "missing form field 'status'".to_string(),
            }),
        }
    }
}
