//! Generic entry-by-entry encoding driver
//!
//! The driver walks a source dataset row by row, applying a pluggable
//! per-entry encoder independently to the inputs and outputs of each row.
//! Each application may expand one entry into several (a text entry
//! becomes one integer per character) or contract it (an integer becomes
//! one vector); the driver flattens the per-entry expansions back into one
//! collection per side. The source is never mutated, so the same dataset
//! can be encoded repeatedly with different encoders. On any failure the
//! partially built output is dropped before the error propagates; no
//! partial result is ever observable.

use tracing::{debug, trace};

use crate::dataset::Dataset;
use crate::entries::Entries;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::row::Row;

/// A per-entry encoding strategy
///
/// One application consumes a single source entry and yields its own
/// (possibly multi-element) output collection.
pub trait EntryEncoder {
    /// Encode one entry into its expansion
    fn encode_entry(&self, entry: &Entry) -> Result<Entries>;
}

impl<F> EntryEncoder for F
where
    F: Fn(&Entry) -> Result<Entries>,
{
    fn encode_entry(&self, entry: &Entry) -> Result<Entries> {
        self(entry)
    }
}

/// Encode every entry of a collection, flattening the results
///
/// The per-entry expansions are concatenated in source order; their
/// entries are moved, not copied, into the flat result, whose size is the
/// sum of the per-entry output sizes.
pub fn encode_entries<E>(source: &Entries, encoder: &E) -> Result<Entries>
where
    E: EntryEncoder + ?Sized,
{
    let mut expansions = Vec::new();
    expansions
        .try_reserve_exact(source.len())
        .map_err(|_| Error::AllocationFailed)?;

    for entry in source {
        expansions.push(encoder.encode_entry(entry)?);
    }

    let total: usize = expansions.iter().map(Entries::len).sum();
    let mut flat = Vec::new();
    flat.try_reserve_exact(total)
        .map_err(|_| Error::AllocationFailed)?;

    for expansion in expansions {
        flat.extend(expansion.into_entries());
    }

    Ok(Entries::from_entries(flat))
}

/// Encode one row, producing a new row with encoded inputs and outputs
pub fn encode_row<E>(source: &Row, encoder: &E) -> Result<Row>
where
    E: EntryEncoder + ?Sized,
{
    let inputs = encode_entries(source.inputs(), encoder)?;
    let outputs = encode_entries(source.outputs(), encoder)?;
    Ok(Row::new(inputs, outputs))
}

/// Encode a whole dataset, producing a new dataset of the same row count
///
/// The source dataset is read-only for the duration of the call.
pub fn encode_dataset<E>(source: &Dataset, encoder: &E) -> Result<Dataset>
where
    E: EntryEncoder + ?Sized,
{
    debug!(rows = source.size(), "encoding dataset");

    let mut encoded = Dataset::new();
    for (index, row) in source.iter().enumerate() {
        trace!(row = index, "encoding row");
        encoded.append(encode_row(row, encoder)?);
    }

    Ok(encoded)
}

impl Dataset {
    /// Encode this dataset with the given per-entry encoder
    ///
    /// Convenience form of [`encode_dataset`].
    pub fn encode<E>(&self, encoder: &E) -> Result<Dataset>
    where
        E: EntryEncoder + ?Sized,
    {
        encode_dataset(self, encoder)
    }
}
