mod common;

use arithmos_api::{ApiError, AppState, build_app_with};
use arithmos_core::{CalcError, Operation};
use axum::{Router, routing::post};
use common::json_request;
use serde_json::json;

async fn explode() -> &'static str {
    panic!("operand table corrupted")
}

async fn internal_failure() -> Result<&'static str, ApiError> {
    Err(ApiError::calculation(
        Operation::Add,
        CalcError::Internal("add received 1 operands".to_string()),
        true,
    ))
}

fn app_with_failing_routes() -> Router {
    let extra = Router::new()
        .route("/api/calculator/explode", post(explode))
        .route("/api/calculator/internal", post(internal_failure));
    build_app_with(extra, AppState::default())
}

#[tokio::test]
async fn test_handler_panic_returns_service_unavailable() {
    let mut app = app_with_failing_routes();

    let (status, body) = json_request(
        &mut app,
        "POST",
        "/api/calculator/explode",
        Some(json!({"num1": 1, "num2": 2})),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Calculator service unavailable"})
    );
}

#[tokio::test]
async fn test_app_keeps_serving_after_panic() {
    let mut app = app_with_failing_routes();

    json_request(&mut app, "POST", "/api/calculator/explode", Some(json!({}))).await;
    let (status, body) = json_request(
        &mut app,
        "POST",
        "/api/calculator/add",
        Some(json!({"num1": 1, "num2": 2})),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["result"], 3.0);
}

#[tokio::test]
async fn test_internal_calculation_error_returns_500() {
    let mut app = app_with_failing_routes();

    let (status, body) = json_request(
        &mut app,
        "POST",
        "/api/calculator/internal",
        Some(json!({"num1": 1})),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Calculator service unavailable"})
    );
}
