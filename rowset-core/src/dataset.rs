//! In-memory dataset with ordered append and bidirectional traversal

use crate::row::Row;

/// An ordered in-memory dataset of rows
///
/// Rows live in one owned growable sequence, so append is O(1) amortized
/// and both forward and reverse traversal are O(1) per step. Sibling
/// relations between rows are expressed as indices into the owning
/// sequence rather than as links held by the rows themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// The rows in insertion order
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Get the number of rows in this dataset
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Check if this dataset is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row to the end of this dataset
    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the first row, if any
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Get the last row, if any
    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Get the row at the given position
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get the position of the row following the one at `index`
    ///
    /// Returns `None` for the last row, or if `index` is past the end.
    pub fn next_of(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.rows.len()).then_some(next)
    }

    /// Get the position of the row preceding the one at `index`
    ///
    /// Returns `None` for the first row, or if `index` is past the end.
    pub fn previous_of(&self, index: usize) -> Option<usize> {
        if index >= self.rows.len() {
            return None;
        }
        index.checked_sub(1)
    }

    /// Iterate over the rows in insertion order
    ///
    /// The iterator is double-ended, so `.rev()` traverses from the tail.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::Entries;
    use crate::entry::Entry;

    fn int_row(value: i64) -> Row {
        Row::new(
            Entries::from_entries(vec![Entry::from_int(value)]),
            Entries::from_entries(vec![Entry::from_int(value * 10)]),
        )
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        assert_eq!(dataset.size(), 0);
        assert!(dataset.is_empty());
        assert!(dataset.first().is_none());
        assert!(dataset.last().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut dataset = Dataset::new();
        for value in 1..=3 {
            dataset.append(int_row(value));
        }

        assert_eq!(dataset.size(), 3);
        let forward: Vec<i64> = dataset
            .iter()
            .map(|row| row.inputs().get(0).unwrap().as_int().unwrap())
            .collect();
        assert_eq!(forward, vec![1, 2, 3]);
    }

    #[test]
    fn test_reverse_traversal_is_exact_reverse() {
        let mut dataset = Dataset::new();
        for value in 1..=5 {
            dataset.append(int_row(value));
        }

        let forward: Vec<i64> = dataset
            .iter()
            .map(|row| row.inputs().get(0).unwrap().as_int().unwrap())
            .collect();
        let mut backward: Vec<i64> = dataset
            .iter()
            .rev()
            .map(|row| row.inputs().get(0).unwrap().as_int().unwrap())
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_head_and_tail_relations() {
        let mut dataset = Dataset::new();
        for value in 1..=3 {
            dataset.append(int_row(value));
        }

        // Head has no predecessor; tail has no successor.
        assert_eq!(dataset.previous_of(0), None);
        assert_eq!(dataset.next_of(2), None);

        assert_eq!(dataset.next_of(0), Some(1));
        assert_eq!(dataset.previous_of(2), Some(1));

        // Out-of-range positions have no relations at all.
        assert_eq!(dataset.next_of(7), None);
        assert_eq!(dataset.previous_of(7), None);
    }

    #[test]
    fn test_first_and_last() {
        let mut dataset = Dataset::new();
        dataset.append(int_row(1));
        dataset.append(int_row(2));

        assert_eq!(dataset.first().unwrap().inputs().get(0).unwrap().as_int().unwrap(), 1);
        assert_eq!(dataset.last().unwrap().inputs().get(0).unwrap().as_int().unwrap(), 2);
    }
}
