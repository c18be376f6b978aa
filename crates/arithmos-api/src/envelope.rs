//! JSON response envelope shared by every calculator endpoint

use arithmos_core::Calculation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every calculator endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Non-finite results serialize as `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
}

impl OperationResponse {
    pub fn success(calculation: &Calculation) -> Self {
        Self {
            success: Some(true),
            message: Some(calculation.message().to_string()),
            error: None,
            result: Some(calculation.result),
        }
    }

    /// Error body; `with_success` controls whether `"success": false` is present
    pub fn failure(error: impl Into<String>, with_success: bool) -> Self {
        Self {
            success: with_success.then_some(false),
            message: None,
            error: Some(error.into()),
            result: None,
        }
    }
}

/// `num1`/`num2` body for add, subtract, multiply and divide
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TwoOperandRequest {
    pub num1: f64,
    pub num2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExponentRequest {
    pub base: f64,
    pub exponent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SqrtRequest {
    pub number: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuloRequest {
    pub dividend: f64,
    pub divisor: f64,
}
