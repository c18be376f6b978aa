//! The catalogue of supported arithmetic operations

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ErrorKind;
use crate::validation::{Constraint, Validator};

const PAIR_FIELDS: [&str; 2] = ["num1", "num2"];
const PAIR_MISSING: &str = "Missing parameters: num1 and num2 are required";
const PAIR_INVALID: &str = "Invalid input: num1 and num2 must be valid numbers";

/// Arithmetic operation, named by its route segment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
    Sqrt,
    Modulo,
}

impl Operation {
    /// True for add/subtract/multiply/divide, which share the `num1`/`num2` contract
    pub fn is_two_operand(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide
        )
    }

    /// Operand field names, in evaluation order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                &PAIR_FIELDS
            }
            Operation::Exponent => &["base", "exponent"],
            Operation::Sqrt => &["number"],
            Operation::Modulo => &["dividend", "divisor"],
        }
    }

    /// Validation recipe for this operation's operands
    pub fn validator(&self) -> Validator {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => {
                Validator::new(&PAIR_FIELDS, PAIR_INVALID).missing(PAIR_MISSING)
            }
            Operation::Divide => Validator::new(&PAIR_FIELDS, PAIR_INVALID)
                .missing(PAIR_MISSING)
                .rule(
                    "num2",
                    Constraint::NonZero,
                    ErrorKind::DivisionByZero,
                    "Cannot divide by zero",
                ),
            Operation::Exponent => Validator::new(self.fields(), "Base and exponent must be numbers"),
            Operation::Sqrt => Validator::new(self.fields(), "Input must be a non-negative number")
                .rule(
                    "number",
                    Constraint::NonNegative,
                    ErrorKind::InvalidDomain,
                    "Input must be a non-negative number",
                ),
            Operation::Modulo => {
                Validator::new(self.fields(), "Both dividend and divisor must be numbers").rule(
                    "divisor",
                    Constraint::NonZero,
                    ErrorKind::InvalidDomain,
                    "Divisor cannot be zero",
                )
            }
        }
    }

    /// Apply the operation to already validated operands
    pub fn apply(&self, operands: &[f64]) -> Option<f64> {
        match (self, operands) {
            (Operation::Add, [a, b]) => Some(a + b),
            (Operation::Subtract, [a, b]) => Some(a - b),
            (Operation::Multiply, [a, b]) => Some(a * b),
            (Operation::Divide, [a, b]) => Some(a / b),
            (Operation::Exponent, [base, exponent]) => Some(base.powf(*exponent)),
            (Operation::Sqrt, [n]) => Some(n.sqrt()),
            // `%` on f64 truncates, so the remainder carries the dividend's sign
            (Operation::Modulo, [dividend, divisor]) => Some(dividend % divisor),
            _ => None,
        }
    }

    /// Message returned alongside a successful result
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Add => "Addition successful",
            Operation::Subtract => "Subtraction successful",
            Operation::Multiply => "Multiplication successful",
            Operation::Divide => "Division successful",
            Operation::Exponent => "Exponent successful",
            Operation::Sqrt => "Square root successful",
            Operation::Modulo => "Modulo successful",
        }
    }

    /// Human-readable rendering of `operands` with this operation, e.g. `2 + 3`
    pub fn describe(&self, operands: &[f64]) -> String {
        match (self, operands) {
            (Operation::Sqrt, [n]) => format!("sqrt({})", n),
            (Operation::Exponent, [a, b]) => format!("{}^{}", a, b),
            (op, [a, b]) => format!("{} {} {}", a, op.symbol(), b),
            (op, _) => format!("{}({:?})", op, operands),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Exponent => "^",
            Operation::Sqrt => "sqrt",
            Operation::Modulo => "%",
        }
    }
}
