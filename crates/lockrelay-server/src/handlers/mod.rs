//! HTTP handler modules.
//!
//! Handlers parse the request, read or write the stores held in
//! [`AppState`](crate::state::AppState), and render the response.

pub mod admin;
pub mod report;
pub mod status;

use axum::extract::rejection::FormRejection;
use axum::Form;

use crate::error::ApiError;

/// Raw url-encoded pairs as extracted by axum.
pub type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Unwraps submitted form pairs.
///
/// A request without a form content type (including a bare POST with no
/// body) is treated as an empty form. Any other rejection becomes a
/// `400` with the standard error body.
pub(crate) fn form_pairs(form: FormPairs) -> Result<Vec<(String, String)>, ApiError> {
    match form {
        Ok(Form(pairs)) => Ok(pairs),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(Vec::new()),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}
