//! Logging port for calculation outcomes
//!
//! The calculator reports every outcome through a [`CalculationLog`] handed to
//! it at construction, so handlers never reach for a global logger.

use std::sync::{Arc, Mutex};

use crate::error::CalcError;
use crate::operation::Operation;

/// Severity of a recorded outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Receiver of calculation outcomes
pub trait CalculationLog: Send + Sync {
    /// A calculation finished with `result`
    fn succeeded(&self, operation: Operation, operands: &[f64], result: f64);

    /// A calculation was refused; `operands` holds whichever fields parsed as numbers
    fn rejected(&self, operation: Operation, operands: &[f64], error: &CalcError);
}

/// Arc-wrapped log for sharing between handlers
pub type SharedLog = Arc<dyn CalculationLog>;

/// Two-operand rejections are warnings; the extended operations report errors.
pub fn rejection_level(operation: Operation, error: &CalcError) -> LogLevel {
    if !error.kind().is_client_error() {
        LogLevel::Error
    } else if operation.is_two_operand() {
        LogLevel::Warn
    } else {
        LogLevel::Error
    }
}

/// Line logged for a successful calculation
pub fn success_line(operation: Operation, operands: &[f64], result: f64) -> String {
    format!(
        "{}: {} = {}",
        operation.success_message(),
        operation.describe(operands),
        result
    )
}

/// Line logged for a refused calculation.
///
/// The operands are rendered only when every field parsed, e.g. a zero divisor.
pub fn rejection_line(operation: Operation, operands: &[f64], error: &CalcError) -> String {
    if operands.len() == operation.fields().len() {
        format!("{}: {}", error, operation.describe(operands))
    } else {
        error.to_string()
    }
}

/// [`CalculationLog`] backed by the `tracing` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl CalculationLog for TracingLog {
    fn succeeded(&self, operation: Operation, operands: &[f64], result: f64) {
        if !result.is_finite() {
            tracing::warn!(%operation, ?operands, "Non-finite result: {}", result);
        }
        tracing::info!(%operation, "{}", success_line(operation, operands, result));
    }

    fn rejected(&self, operation: Operation, operands: &[f64], error: &CalcError) {
        let kind = error.kind();
        let line = rejection_line(operation, operands, error);
        match rejection_level(operation, error) {
            LogLevel::Warn => tracing::warn!(%operation, %kind, "{}", line),
            _ => tracing::error!(%operation, %kind, "Invalid input: {}", line),
        }
    }
}

/// A single captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub operation: Operation,
    pub message: String,
}

/// In-memory [`CalculationLog`] that keeps every record
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn push(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

impl CalculationLog for MemoryLog {
    fn succeeded(&self, operation: Operation, operands: &[f64], result: f64) {
        self.push(LogRecord {
            level: LogLevel::Info,
            operation,
            message: success_line(operation, operands, result),
        });
    }

    fn rejected(&self, operation: Operation, operands: &[f64], error: &CalcError) {
        self.push(LogRecord {
            level: rejection_level(operation, error),
            operation,
            message: rejection_line(operation, operands, error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_records_in_order() {
        let log = MemoryLog::new();
        log.succeeded(Operation::Add, &[2.0, 3.0], 5.0);
        log.rejected(
            Operation::Divide,
            &[5.0, 0.0],
            &CalcError::DivisionByZero("Cannot divide by zero".to_string()),
        );
        log.rejected(
            Operation::Modulo,
            &[7.0, 0.0],
            &CalcError::InvalidDomain("Divisor cannot be zero".to_string()),
        );

        let records = log.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[0].message, "Addition successful: 2 + 3 = 5");
        assert_eq!(records[1].level, LogLevel::Warn);
        assert_eq!(records[1].message, "Cannot divide by zero: 5 / 0");
        assert_eq!(records[2].level, LogLevel::Error);
        assert_eq!(records[2].message, "Divisor cannot be zero: 7 % 0");
    }

    #[test]
    fn test_rejection_without_all_operands() {
        let err = CalcError::MissingParameter("Missing parameters".to_string());
        assert_eq!(
            rejection_line(Operation::Add, &[1.0], &err),
            "Missing parameters"
        );
    }

    #[test]
    fn test_clones_share_records() {
        let log = MemoryLog::new();
        let shared: SharedLog = Arc::new(log.clone());
        shared.succeeded(Operation::Sqrt, &[9.0], 3.0);
        assert_eq!(log.records()[0].message, "Square root successful: sqrt(9) = 3");
    }

    #[test]
    fn test_internal_errors_log_as_error() {
        let err = CalcError::Internal("boom".to_string());
        assert_eq!(rejection_level(Operation::Add, &err), LogLevel::Error);
    }
}
