//! Parameterized operand validation
//!
//! Every operation describes its inputs as a [`Validator`]: the field names it
//! requires, the messages it reports, and any domain rules its operands must
//! satisfy. Checks run in a fixed order: presence, then type, then domain.

use crate::error::{CalcError, ErrorKind, Result};
use crate::request::{Operand, OperationRequest};

/// Predicate a validated operand must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NonNegative,
    NonZero,
}

impl Constraint {
    pub fn holds(&self, value: f64) -> bool {
        match self {
            Constraint::NonNegative => value >= 0.0,
            Constraint::NonZero => value != 0.0,
        }
    }
}

/// A domain rule attached to one field
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Validation recipe for a set of named numeric fields
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    fields: Vec<&'static str>,
    missing_message: Option<&'static str>,
    invalid_message: &'static str,
    rules: Vec<DomainRule>,
}

impl Validator {
    /// Require `fields`, reporting any type failure with `invalid_message`.
    ///
    /// Without [`Validator::missing`], an absent field counts as a type failure.
    pub fn new(fields: &[&'static str], invalid_message: &'static str) -> Self {
        Self {
            fields: fields.to_vec(),
            missing_message: None,
            invalid_message,
            rules: Vec::new(),
        }
    }

    /// Report absent fields separately from mistyped ones
    pub fn missing(mut self, message: &'static str) -> Self {
        self.missing_message = Some(message);
        self
    }

    /// Attach a domain rule
    pub fn rule(
        mut self,
        field: &'static str,
        constraint: Constraint,
        kind: ErrorKind,
        message: &'static str,
    ) -> Self {
        self.rules.push(DomainRule {
            field,
            constraint,
            kind,
            message,
        });
        self
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Extract the operands in field order, or the first failure
    pub fn validate(&self, request: &OperationRequest) -> Result<Vec<f64>> {
        let operands: Vec<Operand> = self.fields.iter().map(|f| request.operand(f)).collect();

        if let Some(message) = self.missing_message {
            if operands.iter().any(|o| matches!(o, Operand::Missing)) {
                return Err(CalcError::MissingParameter(message.to_string()));
            }
        }

        let values = operands
            .into_iter()
            .map(|operand| match operand {
                Operand::Number(v) => Some(v),
                _ => None,
            })
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| CalcError::InvalidType(self.invalid_message.to_string()))?;

        for rule in &self.rules {
            let Some(index) = self.fields.iter().position(|f| *f == rule.field) else {
                return Err(CalcError::Internal(format!(
                    "rule refers to unknown field '{}'",
                    rule.field
                )));
            };
            if !rule.constraint.holds(values[index]) {
                return Err(CalcError::new(rule.kind, rule.message));
            }
        }

        Ok(values)
    }
}
