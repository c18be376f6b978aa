//! Error types for arithmos-core

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Classification of a rejected calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A required operand was absent from the request
    MissingParameter,
    /// An operand was present but not a finite number
    InvalidType,
    /// An operand was outside the operation's domain (negative root, zero modulus)
    InvalidDomain,
    /// Division with a zero divisor
    DivisionByZero,
    /// Unexpected failure while computing
    Internal,
}

impl ErrorKind {
    /// Whether the caller sent something the service cannot evaluate
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    InvalidType(String),

    #[error("{0}")]
    InvalidDomain(String),

    #[error("{0}")]
    DivisionByZero(String),

    #[error("{0}")]
    Internal(String),
}

impl CalcError {
    /// Build an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::MissingParameter => CalcError::MissingParameter(message),
            ErrorKind::InvalidType => CalcError::InvalidType(message),
            ErrorKind::InvalidDomain => CalcError::InvalidDomain(message),
            ErrorKind::DivisionByZero => CalcError::DivisionByZero(message),
            ErrorKind::Internal => CalcError::Internal(message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MissingParameter(_) => ErrorKind::MissingParameter,
            CalcError::InvalidType(_) => ErrorKind::InvalidType,
            CalcError::InvalidDomain(_) => ErrorKind::InvalidDomain,
            CalcError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            CalcError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// User-facing message
    pub fn message(&self) -> &str {
        match self {
            CalcError::MissingParameter(m)
            | CalcError::InvalidType(m)
            | CalcError::InvalidDomain(m)
            | CalcError::DivisionByZero(m)
            | CalcError::Internal(m) => m,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
