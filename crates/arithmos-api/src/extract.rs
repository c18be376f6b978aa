use arithmos_core::OperationRequest;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::error::ApiError;

/// JSON body read as named operand fields.
///
/// Malformed bodies are rejected through [`ApiError`] so they share the
/// calculator's response envelope.
#[derive(Debug, Clone)]
pub struct OperandBody(pub OperationRequest);

impl<S> FromRequest<S> for OperandBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(OperandBody(OperationRequest::from_value(value)))
    }
}
