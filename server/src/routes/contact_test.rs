use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::rate_limit::RateLimitConfig;
use crate::state::test_helpers::{self, RecordingMailer};

fn app(state: AppState) -> Router {
    crate::routes::api_routes(state).layer(MockConnectInfo(SocketAddr::from(([203, 0, 113, 7], 52_000))))
}

fn post_json(body: &str) -> Request<Body> {
    Request::post("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

const VALID: &str = r#"{"name":"Amina Yusuf","email":"amina@example.com","phone":"","message":"Quote for 500t, please."}"#;

async fn send(app: Router, body: &str) -> (StatusCode, ContactResponse) {
    let resp = app.oneshot(post_json(body)).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let parsed: ContactResponse = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

#[tokio::test]
async fn valid_submission_is_relayed() {
    let mailer = Arc::new(RecordingMailer::default());
    let (status, body) = send(app(test_helpers::test_app_state_with_mailer(mailer.clone())), VALID).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.ok);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(body.reference, Some(sent[0].reference.to_string()));
    assert_eq!(sent[0].email, "amina@example.com");
}

#[tokio::test]
async fn missing_name_is_bad_request() {
    let mailer = Arc::new(RecordingMailer::default());
    let body = r#"{"name":"  ","email":"a@b.co","message":"hi"}"#;
    let (status, resp) = send(app(test_helpers::test_app_state_with_mailer(mailer.clone())), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!resp.ok);
    assert_eq!(resp.error.as_deref(), Some("Please fill in your name."));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, resp) = send(app(test_helpers::test_app_state()), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error.as_deref(), Some("Invalid submission."));
}

#[tokio::test]
async fn unconfigured_relay_is_service_unavailable() {
    let (status, resp) = send(app(test_helpers::test_app_state()), VALID).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!resp.ok);
}

#[tokio::test]
async fn invalid_input_wins_over_unconfigured_relay() {
    let body = r#"{"name":"A","email":"nope","message":"hi"}"#;
    let (status, _) = send(app(test_helpers::test_app_state()), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn relay_failure_is_bad_gateway_without_provider_details() {
    let mailer = Arc::new(RecordingMailer::failing("resend: 401 invalid api key"));
    let (status, resp) = send(app(test_helpers::test_app_state_with_mailer(mailer)), VALID).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error = resp.error.unwrap();
    assert!(!error.contains("api key"));
    assert_eq!(error, RELAY_FAILED);
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited() {
    let mailer = Arc::new(RecordingMailer::default());
    let limits = RateLimitConfig { per_client_limit: 2, ..RateLimitConfig::default() };
    let state = test_helpers::test_app_state_with_limits(mailer.clone(), limits);

    for _ in 0..2 {
        let (status, _) = send(app(state.clone()), VALID).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, resp) = send(app(state), VALID).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.error.as_deref(), Some(RATE_LIMITED));
    assert_eq!(mailer.sent_count(), 2);
}

#[tokio::test]
async fn healthz_is_ok() {
    let resp = app(test_helpers::test_app_state())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[test]
fn delivery_errors_map_to_bad_gateway() {
    let (status, Json(body)) = contact_error_reply(&ContactError::Delivery("timeout".into()));
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error.as_deref(), Some(RELAY_FAILED));
}
