//! Entry type owning a single tagged value

use crate::error::Result;
use crate::value::{Value, ValueKind};

/// A single data entry owning exactly one value
///
/// Entries are exclusively owned by their containing collection; dropping
/// the collection releases every entry and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The value held by this entry
    value: Value,
}

impl Entry {
    /// Create a new entry from an owned value of any kind
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Create a new entry wrapping a plain integer
    pub fn from_int(value: i64) -> Self {
        Self::new(Value::Int(value))
    }

    /// Get the value held by this entry
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Get the kind of the value held by this entry
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Get the integer payload of this entry
    pub fn as_int(&self) -> Result<i64> {
        self.value.as_int()
    }

    /// Get the text payload of this entry
    pub fn as_text(&self) -> Result<&str> {
        self.value.as_text()
    }

    /// Get the vector payload of this entry
    pub fn as_vector(&self) -> Result<&[f64]> {
        self.value.as_vector()
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
