//! Error types for dataset construction and encoding

use thiserror::Error;

use crate::value::ValueKind;

/// Result type for dataset construction and encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for dataset construction and encoding operations
#[derive(Error, Debug)]
pub enum Error {
    /// Memory reservation failed
    #[error("Memory allocation failed")]
    AllocationFailed,

    /// Slot index past the end of a fixed-size collection
    #[error("Index out of bounds: {index} >= {size}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The size of the collection
        size: usize,
    },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Value outside the encodable range
    #[error("Value out of range: {value} not in [0, {size})")]
    ValueOutOfRange {
        /// The value that was out of range
        value: i64,
        /// The exclusive upper bound of the range
        size: usize,
    },

    /// Value kind mismatch
    #[error("Value kind mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the operation required
        expected: ValueKind,
        /// The kind the value actually held
        actual: ValueKind,
    },
}
