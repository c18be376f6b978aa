//! HTTP error rendering

use arithmos_core::{CalcError, ErrorKind, Operation};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::OperationResponse;

/// Message shown for any server-side failure
pub const SERVICE_UNAVAILABLE: &str = "Calculator service unavailable";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The calculator refused the request
    #[error("{operation}: {error}")]
    Calculation {
        operation: Operation,
        error: CalcError,
        with_success: bool,
    },

    /// The body could not be read as JSON
    #[error("Invalid request body: {message}")]
    Body { status: StatusCode, message: String },

    /// A handler failed unexpectedly
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn calculation(operation: Operation, error: CalcError, with_success: bool) -> Self {
        ApiError::Calculation {
            operation,
            error,
            with_success,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Calculation { error, .. } => match error.kind() {
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Body { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> OperationResponse {
        match self {
            ApiError::Calculation {
                error,
                with_success,
                ..
            } => match error.kind() {
                ErrorKind::Internal => {
                    OperationResponse::failure(SERVICE_UNAVAILABLE, *with_success)
                }
                _ => OperationResponse::failure(error.message(), *with_success),
            },
            ApiError::Body { message, .. } => OperationResponse::failure(message.clone(), true),
            ApiError::Internal(_) => OperationResponse::failure(SERVICE_UNAVAILABLE, true),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("{}", detail);
        }
        (self.status(), Json(self.body())).into_response()
    }
}
