//! Row type pairing an inputs collection with an outputs collection

use crate::entries::Entries;

/// A single record: one inputs collection and one outputs collection
///
/// A row owns both collections outright. Sibling relations between rows
/// are maintained by the owning [`Dataset`](crate::dataset::Dataset), not
/// by the row itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The input entries for this row
    inputs: Entries,

    /// The output entries for this row
    outputs: Entries,
}

impl Row {
    /// Create a new row from its inputs and outputs collections
    pub fn new(inputs: Entries, outputs: Entries) -> Self {
        Self { inputs, outputs }
    }

    /// Get the input entries for this row
    pub fn inputs(&self) -> &Entries {
        &self.inputs
    }

    /// Get the output entries for this row
    pub fn outputs(&self) -> &Entries {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn test_row_owns_both_sides() {
        let inputs = Entries::from_entries(vec![Entry::from_int(12), Entry::from_int(34)]);
        let outputs = Entries::from_entries(vec![Entry::from_int(46)]);

        let row = Row::new(inputs, outputs);
        assert_eq!(row.inputs().len(), 2);
        assert_eq!(row.outputs().len(), 1);
        assert_eq!(row.outputs().get(0).unwrap().as_int().unwrap(), 46);
    }
}
