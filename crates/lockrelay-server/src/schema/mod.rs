//! Request types for the url-encoded forms.
//!
//! Forms arrive as raw `(key, value)` pairs. The first occurrence of a field
//! wins and unrelated fields are ignored, the way browsers and the lock
//! bridge expect a form server to behave.

pub mod admin;
pub mod report;

/// Returns the first value submitted for `key`.
pub(crate) fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
