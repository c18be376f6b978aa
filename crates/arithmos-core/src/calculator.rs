//! Calculator service: validate, compute, report

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{CalcError, Result};
use crate::log::{SharedLog, TracingLog};
use crate::operation::Operation;
use crate::request::OperationRequest;

/// Outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: f64,
}

impl Calculation {
    pub fn message(&self) -> &'static str {
        self.operation.success_message()
    }
}

/// Stateless evaluator shared by every handler
#[derive(Clone)]
pub struct Calculator {
    log: SharedLog,
}

impl Calculator {
    /// Create a calculator that logs through `log`
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }

    /// Validate the request for `operation` and compute its result.
    ///
    /// Results are not re-checked, so overflow yields an infinite value.
    pub fn evaluate(&self, operation: Operation, request: &OperationRequest) -> Result<Calculation> {
        let outcome = operation.validator().validate(request).and_then(|operands| {
            let result = operation.apply(&operands).ok_or_else(|| {
                CalcError::Internal(format!(
                    "{} received {} operands",
                    operation,
                    operands.len()
                ))
            })?;
            Ok(Calculation {
                operation,
                operands,
                result,
            })
        });

        match &outcome {
            Ok(calc) => self.log.succeeded(operation, &calc.operands, calc.result),
            Err(e) => {
                let operands = request.numbers(operation.fields());
                self.log.rejected(operation, &operands, e)
            }
        }

        outcome
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Arc::new(TracingLog))
    }
}
