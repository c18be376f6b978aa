//! Request types for arithmos-core

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named operand fields taken from a JSON body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationRequest {
    fields: Map<String, Value>,
}

/// What a single named field holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// The key is not present
    Missing,
    /// The key is present but not a finite number
    NotANumber,
    Number(f64),
}

impl OperationRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value.
    ///
    /// Anything other than an object carries no named fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Set a field, replacing any previous value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field as an operand
    pub fn operand(&self, name: &str) -> Operand {
        match self.fields.get(name) {
            None => Operand::Missing,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Operand::Number(v),
                _ => Operand::NotANumber,
            },
            Some(_) => Operand::NotANumber,
        }
    }

    /// Values of those `names` that hold finite numbers, in order
    pub fn numbers(&self, names: &[&str]) -> Vec<f64> {
        names
            .iter()
            .filter_map(|name| match self.operand(name) {
                Operand::Number(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

impl From<Value> for OperationRequest {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operand_lookup() {
        let request = OperationRequest::from_value(json!({
            "num1": 4,
            "num2": -2.5,
            "text": "7",
            "nothing": null,
            "flag": true
        }));

        assert_eq!(request.operand("num1"), Operand::Number(4.0));
        assert_eq!(request.operand("num2"), Operand::Number(-2.5));
        assert_eq!(request.operand("text"), Operand::NotANumber);
        assert_eq!(request.operand("nothing"), Operand::NotANumber);
        assert_eq!(request.operand("flag"), Operand::NotANumber);
        assert_eq!(request.operand("absent"), Operand::Missing);
        assert!(request.contains("nothing"));
    }

    #[test]
    fn test_numbers_skips_non_numeric() {
        let request = OperationRequest::from_value(json!({"a": 1, "b": "2", "c": 3}));
        assert_eq!(request.numbers(&["a", "b", "c", "d"]), vec![1.0, 3.0]);
    }

    #[test]
    fn test_shortest_repr_literals_parse_exactly() {
        for literal in [
            "1.0715660391465826e-75",
            "8338672411873516365e-25",
            "0.30000000000000004",
            "2.2250738585072014e-308",
        ] {
            let body = format!(r#"{{"num1": {}}}"#, literal);
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            let request = OperationRequest::from_value(value);
            let expected: f64 = literal.parse().unwrap();
            match request.operand("num1") {
                Operand::Number(v) => assert_eq!(v.to_bits(), expected.to_bits(), "{}", literal),
                other => panic!("{} parsed as {:?}", literal, other),
            }
        }
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let request = OperationRequest::from_value(json!([1, 2]));
        assert_eq!(request.operand("num1"), Operand::Missing);
        assert_eq!(request, OperationRequest::new());
    }

    #[test]
    fn test_builder() {
        let request = OperationRequest::new().with("base", 2).with("exponent", 0.5);
        assert_eq!(request.operand("base"), Operand::Number(2.0));
        assert_eq!(request.operand("exponent"), Operand::Number(0.5));
    }
}
