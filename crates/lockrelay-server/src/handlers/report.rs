//! Report-back route for the lock bridge.

use axum::extract::State;
use axum::http::StatusCode;

use super::{form_pairs, FormPairs};
use crate::error::ApiError;
use crate::schema::report::ReportForm;
use crate::state::AppState;

/// Records the lock state posted by the bridge.
///
/// `POST /report`
pub async fn receive_report(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<StatusCode, ApiError> {
    let form = ReportForm::from_pairs(&form_pairs(form)?);
    let report = form.report().map_err(|err| {
        tracing::warn!(status = ?form.status, error = %err, "rejected device report");
        ApiError::from(err)
    })?;

    let received = state.device.record(report).await;
    tracing::info!(
        report = %received.report,
        received_at = received.received_at,
        "device report received"
    );

    Ok(StatusCode::NO_CONTENT)
}
