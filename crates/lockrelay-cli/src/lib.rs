//! HTTP client side of lockrelay.
//!
//! [`client::StatusClient`] talks to a running lockrelay server the same way
//! the lock bridge and the admin page do. The `lockrelay` binary is a thin
//! clap front end over it.

pub mod client;

use lockrelay_core::{CoreError, StatusLabel};

/// Parses a status argument given either as an index (`0`, `1`, `2`) or a
/// command word (`lock`, `unlock`, `none`).
///
/// Numeric arguments report the index error rather than an unknown word.
pub fn parse_status_arg(value: &str) -> Result<StatusLabel, CoreError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse();
    }
    StatusLabel::from_command(value)
}
