//! The three-valued lock request status.
//!
//! A [`StatusLabel`] is what the admin form writes and what the lock bridge
//! reads. On the wire it travels as its index (`0`, `1`, `2`); humans see
//! the label (`Lock`, `Unlock`, `None`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Requested lock state.
///
/// The discriminants are the wire indices and must not be reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    Lock = 0,
    Unlock = 1,
    #[default]
    None = 2,
}

impl StatusLabel {
    /// All labels in index order.
    pub const ALL: [StatusLabel; 3] = [StatusLabel::Lock, StatusLabel::Unlock, StatusLabel::None];

    /// Index of this label in the label table.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a label by its table index.
    pub fn from_index(index: u64) -> Result<Self, CoreError> {
        match index {
            0 => Ok(StatusLabel::Lock),
            1 => Ok(StatusLabel::Unlock),
            2 => Ok(StatusLabel::None),
            _ => Err(CoreError::IndexOutOfRange { index }),
        }
    }

    /// Human-readable name shown on the admin page.
    pub fn label(self) -> &'static str {
        match self {
            StatusLabel::Lock => "Lock",
            StatusLabel::Unlock => "Unlock",
            StatusLabel::None => "None",
        }
    }

    /// Lowercase command word used by the lock bridge and the CLI.
    pub fn command(self) -> &'static str {
        match self {
            StatusLabel::Lock => "lock",
            StatusLabel::Unlock => "unlock",
            StatusLabel::None => "none",
        }
    }

    /// Parses a command word (`lock`, `unlock`, `none`), ignoring case.
    pub fn from_command(value: &str) -> Result<Self, CoreError> {
        let word = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.command().eq_ignore_ascii_case(word))
            .ok_or_else(|| CoreError::UnknownCommand {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the form encoding: a decimal index, surrounding whitespace allowed.
impl FromStr for StatusLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: u64 = s.trim().parse().map_err(|_| CoreError::InvalidStatus {
            value: s.to_string(),
        })?;
        Self::from_index(index)
    }
}
