//! Fixed-size ordered collections of entries

use crate::entry::Entry;
use crate::error::{Error, Result};

/// A fixed-size ordered collection of entries
///
/// A constructed collection always has every slot populated; the transient
/// unset-slot phase of construction lives in [`EntriesBuilder`]. The
/// collection owns all contained entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Entries {
    /// The entries in index order
    entries: Vec<Entry>,
}

impl Entries {
    /// Start building a collection with the given number of slots
    ///
    /// Fails with [`Error::InvalidArgument`] if `size` is zero, or with
    /// [`Error::AllocationFailed`] if the backing storage cannot be
    /// reserved.
    pub fn builder(size: usize) -> Result<EntriesBuilder> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "Collection size must be positive".into(),
            ));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailed)?;
        slots.resize_with(size, || None);

        Ok(EntriesBuilder { slots })
    }

    /// Create a collection from an already-complete sequence of entries
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Get the number of entries in this collection
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if this collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at the given index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Iterate over the entries in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Consume this collection, moving out its entries in index order
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A collection under construction, with possibly-unset slots
#[derive(Debug)]
pub struct EntriesBuilder {
    /// The slots, unset until assigned
    slots: Vec<Option<Entry>>,
}

impl EntriesBuilder {
    /// Get the number of slots in the collection under construction
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Place an entry into the slot at the given index
    ///
    /// Replaces any entry already in the slot. Fails with
    /// [`Error::IndexOutOfBounds`] if `index` is past the end.
    pub fn set(&mut self, index: usize, entry: Entry) -> Result<()> {
        let size = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(entry);
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, size }),
        }
    }

    /// Finish construction, checking that every slot is populated
    ///
    /// Fails with [`Error::InvalidArgument`] naming the first unset slot.
    pub fn build(self) -> Result<Entries> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(self.slots.len())
            .map_err(|_| Error::AllocationFailed)?;

        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                Some(entry) => entries.push(entry),
                None => {
                    return Err(Error::InvalidArgument(format!(
                        "Slot {index} is unset"
                    )));
                }
            }
        }

        Ok(Entries::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_populates_all_slots() {
        let mut builder = Entries::builder(3).unwrap();
        builder.set(0, Entry::from_int(10)).unwrap();
        builder.set(1, Entry::from_int(20)).unwrap();
        builder.set(2, Entry::from_int(30)).unwrap();

        let entries = builder.build().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.get(1).unwrap().as_int().unwrap(), 20);
    }

    #[test]
    fn test_builder_zero_size_rejected() {
        let err = Entries::builder(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_builder_unset_slot_rejected() {
        let mut builder = Entries::builder(2).unwrap();
        builder.set(0, Entry::from_int(1)).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_builder_index_out_of_bounds() {
        let mut builder = Entries::builder(2).unwrap();
        let err = builder.set(2, Entry::from_int(1)).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfBounds { index: 2, size: 2 }
        ));
    }

    #[test]
    fn test_iteration_in_index_order() {
        let entries = Entries::from_entries(vec![
            Entry::from_int(1),
            Entry::from_int(2),
            Entry::from_int(3),
        ]);

        let values: Vec<i64> = entries.iter().map(|e| e.as_int().unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
