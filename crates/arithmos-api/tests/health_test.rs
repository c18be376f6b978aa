mod common;

use axum::http::StatusCode;
use common::{create_test_app, json_request};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let mut app = create_test_app();

    let (status, body) = json_request(&mut app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK", "message": "API is healthy"}));
}

#[tokio::test]
async fn test_health_unaffected_by_failed_calculations() {
    let mut app = create_test_app();

    json_request(
        &mut app,
        "POST",
        "/api/calculator/divide",
        Some(json!({"num1": 1, "num2": 0})),
    )
    .await;
    json_request(&mut app, "POST", "/api/calculator/add", Some(json!("junk"))).await;

    let (status, body) = json_request(&mut app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut app = create_test_app();

    let (status, _) = json_request(
        &mut app,
        "POST",
        "/api/calculator/power",
        Some(json!({"num1": 1, "num2": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_operations() {
    let mut app = create_test_app();

    let (status, body) = json_request(&mut app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    for op in [
        "add", "subtract", "multiply", "divide", "exponent", "sqrt", "modulo",
    ] {
        let path = format!("/api/calculator/{}", op);
        assert!(body["paths"][&path]["post"].is_object(), "missing {}", path);
    }
    assert!(body["paths"]["/api/health"]["get"].is_object());
}

#[tokio::test]
async fn test_swagger_can_be_disabled() {
    let (mut app, _) = common::create_app_with(arithmos_api::ApiConfig {
        enable_swagger: false,
        ..Default::default()
    });

    let (status, _) = json_request(&mut app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
