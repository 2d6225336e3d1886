//! Tagged value storage for dataset entries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single typed value held by a dataset entry
///
/// The closed set of kinds covers everything the encoding pipeline
/// produces or consumes: plain integers, text, and dense numeric vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// UTF-8 text
    Text(String),

    /// Dense numeric vector
    Vector(Vec<f64>),
}

/// The kind of a value, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// 64-bit signed integer
    Int,

    /// UTF-8 text
    Text,

    /// Dense numeric vector
    Vector,
}

impl Value {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
            Value::Vector(_) => ValueKind::Vector,
        }
    }

    /// Get the integer payload of this value
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(value) => Ok(*value),
            other => Err(Error::TypeMismatch {
                expected: ValueKind::Int,
                actual: other.kind(),
            }),
        }
    }

    /// Get the text payload of this value
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Value::Text(text) => Ok(text),
            other => Err(Error::TypeMismatch {
                expected: ValueKind::Text,
                actual: other.kind(),
            }),
        }
    }

    /// Get the vector payload of this value
    pub fn as_vector(&self) -> Result<&[f64]> {
        match self {
            Value::Vector(values) => Ok(values),
            other => Err(Error::TypeMismatch {
                expected: ValueKind::Vector,
                actual: other.kind(),
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => write!(f, "Int"),
            ValueKind::Text => write!(f, "Text"),
            ValueKind::Vector => write!(f, "Vector"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Int(7).kind(), ValueKind::Int);
        assert_eq!(Value::Text("7".into()).kind(), ValueKind::Text);
        assert_eq!(Value::Vector(vec![1.0]).kind(), ValueKind::Vector);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(-3).as_int().unwrap(), -3);
        assert_eq!(Value::Text("ab".into()).as_text().unwrap(), "ab");
        assert_eq!(Value::Vector(vec![0.0, 1.0]).as_vector().unwrap(), [0.0, 1.0]);
    }

    #[test]
    fn test_value_kind_mismatch() {
        let err = Value::Text("7".into()).as_int().unwrap_err();
        match err {
            Error::TypeMismatch { expected, actual } => {
                assert_eq!(expected, ValueKind::Int);
                assert_eq!(actual, ValueKind::Text);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
