use arithmos_api::{ApiConfig, AppState, build_app};
use arithmos_core::{Calculator, MemoryLog};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a test application with the given config and a recording log
#[allow(dead_code)]
pub fn create_app_with(config: ApiConfig) -> (axum::Router, MemoryLog) {
    let log = MemoryLog::new();
    let calculator = Calculator::new(Arc::new(log.clone()));
    (build_app(AppState::new(calculator, config)), log)
}

/// Create a test application with default configuration
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    create_app_with(ApiConfig::default()).0
}

/// Send a request and decode the body as JSON (or a JSON string for plain text)
#[allow(dead_code)]
pub async fn send(app: &mut axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_value: Value = if body_bytes.is_empty() {
        json!(null)
    } else {
        match serde_json::from_slice(&body_bytes) {
            Ok(json) => json,
            Err(_) => {
                let text = String::from_utf8_lossy(&body_bytes);
                json!(text.to_string())
            }
        }
    };

    (status, body_value)
}

/// Helper function to make JSON requests
#[allow(dead_code)]
pub async fn json_request(
    app: &mut axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = if let Some(body) = body {
        request_builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    send(app, request).await
}
