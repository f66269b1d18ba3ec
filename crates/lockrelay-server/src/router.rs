//! Router assembly for the lockrelay HTTP API.
//!
//! [`build_router`] wires the handler functions to their routes with CORS and
//! tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS is permissive (the lock bridge and browsers poll from anywhere).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/admin",
            get(handlers::admin::admin_page).post(handlers::admin::update_status),
        )
        .route(
            "/admin/request-report",
            post(handlers::admin::request_report),
        )
        .route("/get-status", get(handlers::status::get_status))
        .route("/get-command", get(handlers::status::get_command))
        .route("/report", post(handlers::report::receive_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
