//! Schema for the admin page form.

use lockrelay_core::{CoreError, StatusLabel};

use super::first_value;

/// Fields posted by the admin page.
///
/// `state` is kept as the raw submitted string so a missing field can be
/// told apart from an invalid one.
#[derive(Debug, Clone, Default)]
pub struct AdminForm {
    pub state: Option<String>,
}

impl AdminForm {
    /// Builds the form from submitted pairs; a repeated `state` keeps its
    /// first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        AdminForm {
            state: first_value(pairs, "state"),
        }
    }

    /// Validates the submitted field. A missing field requests `None`.
    pub fn requested_status(&self) -> Result<StatusLabel, CoreError> {
        match self.state.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(StatusLabel::None),
        }
    }
}
