use arithmos_core::{Operation, OperationRequest};
use axum::{Json, Router, extract::State, routing::post};

use crate::AppState;
use crate::envelope::{
    ExponentRequest, ModuloRequest, OperationResponse, SqrtRequest, TwoOperandRequest,
};
use crate::error::ApiError;
use crate::extract::OperandBody;

type OperationResult = Result<Json<OperationResponse>, ApiError>;

/// Calculator routes, one per operation
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/subtract", post(subtract))
        .route("/multiply", post(multiply))
        .route("/divide", post(divide))
        .route("/exponent", post(exponent))
        .route("/sqrt", post(sqrt))
        .route("/modulo", post(modulo))
}

fn evaluate(state: &AppState, operation: Operation, request: OperationRequest) -> OperationResult {
    state
        .calculator
        .evaluate(operation, &request)
        .map(|calculation| Json(OperationResponse::success(&calculation)))
        .map_err(|error| {
            let with_success = state.config.error_envelope.includes_success(operation);
            ApiError::calculation(operation, error, with_success)
        })
}

/// Add two numbers
#[utoipa::path(
    post,
    path = "/api/calculator/add",
    request_body = TwoOperandRequest,
    responses(
        (status = 200, description = "Sum of num1 and num2", body = OperationResponse),
        (status = 400, description = "Missing or invalid operands", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn add(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Add, request)
}

/// Subtract num2 from num1
#[utoipa::path(
    post,
    path = "/api/calculator/subtract",
    request_body = TwoOperandRequest,
    responses(
        (status = 200, description = "Difference of num1 and num2", body = OperationResponse),
        (status = 400, description = "Missing or invalid operands", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn subtract(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Subtract, request)
}

/// Multiply two numbers
#[utoipa::path(
    post,
    path = "/api/calculator/multiply",
    request_body = TwoOperandRequest,
    responses(
        (status = 200, description = "Product of num1 and num2", body = OperationResponse),
        (status = 400, description = "Missing or invalid operands", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn multiply(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Multiply, request)
}

/// Divide num1 by num2
#[utoipa::path(
    post,
    path = "/api/calculator/divide",
    request_body = TwoOperandRequest,
    responses(
        (status = 200, description = "Quotient of num1 and num2", body = OperationResponse),
        (status = 400, description = "Invalid operands or zero divisor", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn divide(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Divide, request)
}

/// Raise base to exponent
#[utoipa::path(
    post,
    path = "/api/calculator/exponent",
    request_body = ExponentRequest,
    responses(
        (status = 200, description = "base raised to exponent", body = OperationResponse),
        (status = 400, description = "Operands are not numbers", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn exponent(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Exponent, request)
}

/// Principal square root
#[utoipa::path(
    post,
    path = "/api/calculator/sqrt",
    request_body = SqrtRequest,
    responses(
        (status = 200, description = "Square root of number", body = OperationResponse),
        (status = 400, description = "Input is not a non-negative number", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn sqrt(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Sqrt, request)
}

/// Remainder of dividend / divisor, signed like the dividend
#[utoipa::path(
    post,
    path = "/api/calculator/modulo",
    request_body = ModuloRequest,
    responses(
        (status = 200, description = "Remainder", body = OperationResponse),
        (status = 400, description = "Invalid operands or zero divisor", body = OperationResponse)
    ),
    tag = "calculator"
)]
pub async fn modulo(
    State(state): State<AppState>,
    OperandBody(request): OperandBody,
) -> OperationResult {
    evaluate(&state, Operation::Modulo, request)
}
