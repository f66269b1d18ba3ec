//! Plain-text routes polled by the lock bridge.

use axum::extract::State;

use crate::state::AppState;

/// Returns the current status index (`0`, `1` or `2`) as plain text.
///
/// `GET /get-status`
pub async fn get_status(State(state): State<AppState>) -> String {
    state.store.get().await.index().to_string()
}

/// Returns the bridge command word: `status` while a report is pending,
/// otherwise `lock`, `unlock` or `none` for the current request.
///
/// `GET /get-command`
pub async fn get_command(State(state): State<AppState>) -> String {
    if state.device.report_requested().await {
        return "status".to_string();
    }
    state.store.get().await.command().to_string()
}
