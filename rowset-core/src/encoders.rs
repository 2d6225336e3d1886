//! Concrete entry encoders: index, decimal string, and one-hot

use crate::alphabet::Alphabet;
use crate::dataset::Dataset;
use crate::encode::{encode_dataset, EntryEncoder};
use crate::entries::Entries;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::value::Value;

/// Sentinel index emitted for characters absent from the alphabet
///
/// Index encoding does not report unknown characters as errors; they are
/// stored as ordinary `-1` values, indistinguishable from real data.
/// Callers that need to detect them must scan the output.
pub const UNKNOWN_TOKEN: i64 = -1;

/// Encodes text entries into one integer entry per character
///
/// Each character is mapped to its position in the alphabet, or
/// [`UNKNOWN_TOKEN`] if the alphabet does not contain it. The output size
/// per source entry equals that entry's character count.
#[derive(Debug, Clone)]
pub struct IndexEncoder<'a> {
    /// The alphabet defining the symbol-to-position mapping
    alphabet: &'a Alphabet,
}

impl<'a> IndexEncoder<'a> {
    /// Create an index encoder over the given alphabet
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }
}

impl EntryEncoder for IndexEncoder<'_> {
    fn encode_entry(&self, entry: &Entry) -> Result<Entries> {
        let text = entry.as_text()?;

        let mut encoded = Vec::new();
        encoded
            .try_reserve_exact(text.chars().count())
            .map_err(|_| Error::AllocationFailed)?;

        for symbol in text.chars() {
            let index = match self.alphabet.index_of(symbol) {
                Some(position) => position as i64,
                None => UNKNOWN_TOKEN,
            };
            encoded.push(Entry::from_int(index));
        }

        Ok(Entries::from_entries(encoded))
    }
}

/// Encodes integer entries into their canonical decimal text form
///
/// Produces exactly one text entry per source entry; negative values
/// carry a leading sign.
#[derive(Debug, Clone, Default)]
pub struct DecimalStringEncoder;

impl EntryEncoder for DecimalStringEncoder {
    fn encode_entry(&self, entry: &Entry) -> Result<Entries> {
        let value = entry.as_int()?;
        Ok(Entries::from_entries(vec![Entry::new(Value::Text(
            value.to_string(),
        ))]))
    }
}

/// Encodes integer entries into dense one-hot vectors
///
/// Produces exactly one vector entry of the configured length per source
/// entry, with 1 at the source value's position and 0 elsewhere.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    /// The vector length; also the exclusive upper bound on input values
    size: usize,
}

impl OneHotEncoder {
    /// Create a one-hot encoder producing vectors of the given length
    ///
    /// Fails with [`Error::InvalidArgument`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "One-hot size must be positive".into(),
            ));
        }
        Ok(Self { size })
    }

    /// Get the vector length this encoder produces
    pub fn size(&self) -> usize {
        self.size
    }
}

impl EntryEncoder for OneHotEncoder {
    fn encode_entry(&self, entry: &Entry) -> Result<Entries> {
        let value = entry.as_int()?;

        let position = usize::try_from(value)
            .ok()
            .filter(|&p| p < self.size)
            .ok_or(Error::ValueOutOfRange {
                value,
                size: self.size,
            })?;

        let mut one_hot = Vec::new();
        one_hot
            .try_reserve_exact(self.size)
            .map_err(|_| Error::AllocationFailed)?;
        one_hot.resize(self.size, 0.0);
        one_hot[position] = 1.0;

        Ok(Entries::from_entries(vec![Entry::new(Value::Vector(
            one_hot,
        ))]))
    }
}

/// Index-encode a dataset of text rows against an alphabet
pub fn index_encode(source: &Dataset, alphabet: &Alphabet) -> Result<Dataset> {
    encode_dataset(source, &IndexEncoder::new(alphabet))
}

/// Encode a dataset of integer rows into decimal text rows
pub fn decimal_string_encode(source: &Dataset) -> Result<Dataset> {
    encode_dataset(source, &DecimalStringEncoder)
}

/// One-hot encode a dataset of integer rows with the given vector length
pub fn one_hot_encode(source: &Dataset, size: usize) -> Result<Dataset> {
    encode_dataset(source, &OneHotEncoder::new(size)?)
}
