//! Core types and encoding pipeline for row-oriented in-memory datasets
//!
//! This crate provides a small dataset container — typed values, entries,
//! fixed-size entry collections, rows, and an ordered dataset — together
//! with a generic, strategy-driven encoding pipeline that rebuilds a
//! dataset row by row under a pluggable per-entry encoder. Three concrete
//! encoders are provided: character-to-index, integer-to-decimal-string,
//! and integer-to-one-hot-vector.

#![warn(missing_docs)]

pub mod alphabet;
pub mod dataset;
pub mod encode;
pub mod encoders;
pub mod entries;
pub mod entry;
pub mod error;
pub mod row;
pub mod value;

// Re-export key types for convenience
pub use alphabet::Alphabet;
pub use dataset::Dataset;
pub use encode::{encode_dataset, encode_entries, encode_row, EntryEncoder};
pub use encoders::{
    decimal_string_encode, index_encode, one_hot_encode, DecimalStringEncoder, IndexEncoder,
    OneHotEncoder, UNKNOWN_TOKEN,
};
pub use entries::{Entries, EntriesBuilder};
pub use entry::Entry;
pub use error::{Error, Result};
pub use row::Row;
pub use value::{Value, ValueKind};
