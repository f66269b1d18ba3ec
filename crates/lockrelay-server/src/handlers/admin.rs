//! Admin page for viewing and setting the lock request.

use axum::extract::State;
use axum::response::Html;

use lockrelay_core::StatusLabel;

use super::{form_pairs, FormPairs};
use crate::device::DeviceSnapshot;
use crate::error::ApiError;
use crate::schema::admin::AdminForm;
use crate::state::AppState;

const ADMIN_TEMPLATE: &str = include_str!("../../static/admin.html");

/// Serves the admin page for the current status.
///
/// `GET /admin`
pub async fn admin_page(State(state): State<AppState>) -> Html<String> {
    render_admin_page(state.store.get().await, &state.device.snapshot().await)
}

/// Applies a form submission and renders the page for the new status.
///
/// A missing `state` field, including a POST with no form body at all,
/// resets the request to `None`. An invalid one is rejected and leaves the
/// store untouched.
///
/// `POST /admin`
pub async fn update_status(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Html<String>, ApiError> {
    let form = AdminForm::from_pairs(&form_pairs(form)?);
    let status = form.requested_status().map_err(|err| {
        tracing::warn!(state = ?form.state, error = %err, "rejected status update");
        ApiError::from(err)
    })?;

    let previous = match form.state {
        Some(_) => state.store.set(status).await,
        None => state.store.reset().await,
    };
    tracing::info!(%previous, current = %status, "request status updated");

    Ok(render_admin_page(status, &state.device.snapshot().await))
}

/// Asks the bridge to report its lock state on its next poll.
///
/// `POST /admin/request-report`
pub async fn request_report(State(state): State<AppState>) -> Html<String> {
    let already_pending = state.device.request_report().await;
    tracing::info!(already_pending, "device report requested");
    render_admin_page(state.store.get().await, &state.device.snapshot().await)
}

/// Fills the admin template with `status` and the bridge state.
pub fn render_admin_page(status: StatusLabel, device: &DeviceSnapshot) -> Html<String> {
    let message = format!("Current Request Status: {}", status);
    let report = match &device.last_report {
        Some(received) => format!(
            "Last Device Report: {} <code>{}</code> (unix time {})",
            received.report.summary(),
            received.report,
            received.received_at
        ),
        None => "Last Device Report: none received".to_string(),
    };
    let pending = if device.report_requested {
        "Report requested, waiting for the device."
    } else {
        ""
    };

    let mut html = ADMIN_TEMPLATE
        .replace("__STATUS_MESSAGE__", &message)
        .replace("__DEVICE_REPORT__", &report)
        .replace("__REPORT_PENDING__", pending);
    for option in StatusLabel::ALL {
        let marker = format!("__SELECTED_{}__", option.index());
        html = html.replace(&marker, if option == status { " selected" } else { "" });
    }
    Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ReceivedReport;

    #[test]
    fn page_shows_label_and_selects_current_option() {
        let Html(html) = render_admin_page(StatusLabel::Unlock, &DeviceSnapshot::default());
        assert!(html.contains("Current Request Status: Unlock"));
        assert!(html.contains(r#"<option value="1" selected>"#));
        assert!(html.contains(r#"<option value="0">"#));
        assert!(html.contains("Last Device Report: none received"));
        assert!(!html.contains("__"));
    }

    #[test]
    fn page_shows_last_report_and_pending_request() {
        let device = DeviceSnapshot {
            last_report: Some(ReceivedReport {
                report: "lock=1,in_unlock=0,pos=12,volt=5.83,volt_crit=0"
                    .parse()
                    .unwrap(),
                received_at: 1_700_000_000,
            }),
            report_requested: true,
        };
        let Html(html) = render_admin_page(StatusLabel::Lock, &device);
        assert!(html.contains("Last Device Report: locked, position 12, 5.83 V"));
        assert!(html.contains("lock=1,in_unlock=0,pos=12,volt=5.83,volt_crit=0"));
        assert!(html.contains("Report requested, waiting for the device."));
    }
}
