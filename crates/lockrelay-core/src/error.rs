//! Core errors for status parsing.
//!
//! Uses `thiserror` so the server can map each variant onto an HTTP status
//! and the CLI can print it verbatim.

use thiserror::Error;

/// Errors produced while turning external input into a [`StatusLabel`](crate::StatusLabel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A form value that is not an unsigned decimal integer.
    #[error("invalid status value '{value}': expected 0, 1 or 2")]
    InvalidStatus { value: String },

    /// An integer that does not index the label table.
    #[error("status index {index} out of range: expected 0, 1 or 2")]
    IndexOutOfRange { index: u64 },

    /// A command word that names no status.
    #[error("unknown status command '{value}': expected lock, unlock or none")]
    UnknownCommand { value: String },

    /// A device status report that does not follow the `key=value,...` layout.
    #[error("invalid device report '{value}': {reason}")]
    InvalidReport { value: String, reason: String },
}
