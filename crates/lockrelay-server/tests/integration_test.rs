//! End-to-end tests for the lockrelay HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! StatusStore -> HTTP response. Each test builds a fresh AppState, so no
//! status leaks between tests. Requests go through
//! `tower::ServiceExt::oneshot` without starting a network server.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use lockrelay_core::StatusLabel;
use lockrelay_server::router::build_router;
use lockrelay_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap(), content_type)
}

/// Sends a GET request and returns (status, body text).
async fn get_text(app: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let (status, body, _) = send(app, request).await;
    (status, body)
}

/// Sends a url-encoded POST and returns (status, body text).
async fn post_form(app: &Router, path: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    let (status, body, _) = send(app, request).await;
    (status, body)
}

async fn current_index(app: &Router) -> String {
    let (status, body) = get_text(app, "/get-status").await;
    assert_eq!(status, StatusCode::OK);
    body
}

// ---------------------------------------------------------------------------
// /get-status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_status_starts_at_none_index() {
    let app = test_app();
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn get_status_is_plain_text() {
    let app = test_app();
    let request = Request::builder()
        .uri("/get-status")
        .body(Body::empty())
        .unwrap();
    let (status, body, content_type) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "2");
    assert!(content_type.unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn get_status_honors_initial_status() {
    let app = build_router(AppState::new(StatusLabel::Unlock));
    assert_eq!(current_index(&app).await, "1");
}

#[tokio::test]
async fn get_status_rejects_post() {
    let app = test_app();
    let (status, _) = post_form(&app, "/get-status", "state=0").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// /admin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_page_shows_initial_status() {
    let app = test_app();
    let (status, html) = get_text(&app, "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: None"), "{html}");
    assert!(html.contains(r#"name="state""#));
}

#[tokio::test]
async fn post_lock_updates_store_and_page() {
    let app = test_app();

    let (status, html) = post_form(&app, "/admin", "state=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: Lock"), "{html}");

    assert_eq!(current_index(&app).await, "0");

    let (_, html) = get_text(&app, "/admin").await;
    assert!(html.contains("Current Request Status: Lock"));
}

#[tokio::test]
async fn post_unlock_updates_store_and_page() {
    let app = test_app();

    let (status, html) = post_form(&app, "/admin", "state=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: Unlock"));
    assert_eq!(current_index(&app).await, "1");
}

#[tokio::test]
async fn post_without_state_resets_to_none() {
    let app = test_app();
    post_form(&app, "/admin", "state=0").await;
    assert_eq!(current_index(&app).await, "0");

    let (status, html) = post_form(&app, "/admin", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: None"));
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn post_ignores_unrelated_fields() {
    let app = test_app();
    let (status, html) = post_form(&app, "/admin", "note=hello&state=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: Unlock"));

    let (status, _) = post_form(&app, "/admin", "note=hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn post_invalid_state_is_rejected_and_store_unchanged() {
    let app = test_app();
    post_form(&app, "/admin", "state=1").await;

    let (status, body) = post_form(&app, "/admin", "state=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["success"], json!(false));
    assert_eq!(error["error"]["code"], json!("BAD_REQUEST"));
    assert!(error["error"]["message"].as_str().unwrap().contains("abc"));

    assert_eq!(current_index(&app).await, "1");
    let (_, html) = get_text(&app, "/admin").await;
    assert!(html.contains("Current Request Status: Unlock"));
}

#[tokio::test]
async fn post_out_of_range_state_is_rejected() {
    let app = test_app();
    for bad in ["state=3", "state=-1", "state=", "state=1.5"] {
        let (status, _) = post_form(&app, "/admin", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad} should be rejected");
    }
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn post_without_body_resets_to_none() {
    let app = build_router(AppState::new(StatusLabel::Lock));
    let request = Request::builder()
        .method("POST")
        .uri("/admin")
        .body(Body::empty())
        .unwrap();
    let (status, html, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: None"), "{html}");
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn post_with_non_form_body_resets_to_none() {
    let app = build_router(AppState::new(StatusLabel::Unlock));
    let request = Request::builder()
        .method("POST")
        .uri("/admin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"state":"0"}"#))
        .unwrap();
    let (status, html, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: None"));
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn repeated_state_field_uses_first_value() {
    let app = test_app();
    let (status, html) = post_form(&app, "/admin", "state=0&state=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Current Request Status: Lock"));
    assert_eq!(current_index(&app).await, "0");

    let (status, _) = post_form(&app, "/admin", "state=abc&state=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(current_index(&app).await, "0");
}

#[tokio::test]
async fn sequential_posts_last_writer_wins() {
    let app = test_app();
    for form in ["state=0", "state=1", "state=0", "state=2", "state=1"] {
        let (status, _) = post_form(&app, "/admin", form).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(current_index(&app).await, "1");
}

#[tokio::test]
async fn separate_states_do_not_share_a_store() {
    let first = test_app();
    let second = test_app();

    post_form(&first, "/admin", "state=0").await;

    assert_eq!(current_index(&first).await, "0");
    assert_eq!(current_index(&second).await, "2");
}

// ---------------------------------------------------------------------------
// Device reports
// ---------------------------------------------------------------------------

const BRIDGE_REPORT: &str = "status=lock=1,in_unlock=0,pos=12,volt=5.83,volt_crit=0";

#[tokio::test]
async fn get_command_follows_current_status() {
    let app = test_app();
    assert_eq!(get_text(&app, "/get-command").await.1, "none");

    post_form(&app, "/admin", "state=0").await;
    assert_eq!(get_text(&app, "/get-command").await.1, "lock");

    post_form(&app, "/admin", "state=1").await;
    assert_eq!(get_text(&app, "/get-command").await.1, "unlock");
}

#[tokio::test]
async fn report_is_recorded_and_shown_on_admin_page() {
    let app = test_app();
    let (_, html) = get_text(&app, "/admin").await;
    assert!(html.contains("Last Device Report: none received"));

    let (status, body) = post_form(&app, "/report", BRIDGE_REPORT).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, html) = get_text(&app, "/admin").await;
    assert!(html.contains("Last Device Report: locked, position 12, 5.83 V"), "{html}");
    // Reporting never changes the request itself.
    assert_eq!(current_index(&app).await, "2");
}

#[tokio::test]
async fn report_request_round_trip() {
    let app = test_app();
    post_form(&app, "/admin", "state=1").await;

    let (status, html) = post_form(&app, "/admin/request-report", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Report requested, waiting for the device."));
    assert!(html.contains("Current Request Status: Unlock"));
    assert_eq!(get_text(&app, "/get-command").await.1, "status");
    assert_eq!(current_index(&app).await, "1");

    post_form(&app, "/report", BRIDGE_REPORT).await;
    assert_eq!(get_text(&app, "/get-command").await.1, "unlock");
    let (_, html) = get_text(&app, "/admin").await;
    assert!(!html.contains("Report requested"));
}

#[tokio::test]
async fn malformed_report_is_rejected() {
    let app = test_app();
    for bad in ["status=lock=maybe", "", "note=1"] {
        let (status, body) = post_form(&app, "/report", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad:?} should be rejected");
        let error: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"]["code"], json!("BAD_REQUEST"));
    }
    let (_, html) = get_text(&app, "/admin").await;
    assert!(html.contains("Last Device Report: none received"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app();
    let (status, _) = get_text(&app, "/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
