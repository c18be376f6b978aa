//! # Arithmos Core
//!
//! Framework-free arithmetic engine behind the Arithmos calculator API:
//! the operation catalogue, operand validation, and the calculator service.

pub mod calculator;
pub mod error;
pub mod log;
pub mod operation;
pub mod request;
pub mod validation;

pub use calculator::{Calculation, Calculator};
pub use error::{CalcError, ErrorKind, Result};
pub use log::{CalculationLog, LogLevel, LogRecord, MemoryLog, SharedLog, TracingLog};
pub use operation::Operation;
pub use request::{Operand, OperationRequest};
pub use validation::{Constraint, DomainRule, Validator};
