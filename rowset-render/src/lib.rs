//! Read-only textual rendering of rowset datasets
//!
//! Pure formatting collaborators for the core container: everything here
//! traverses entries, rows, and datasets without mutating them. The tagged
//! value representation means the renderer branches on the actual kind
//! instead of being told what to assume.

#![warn(missing_docs)]

use std::io::{self, Write};

use rowset_core::{Dataset, Entries, Entry, Row, Value};

/// Horizontal rule printed above and below a dataset listing
const RULE: &str = "-----------------------------------------------";

/// Render a single entry to the sink
///
/// Integers render bare (`46`), text renders quoted (`'12 + 34'`), and
/// vectors render bracketed with one decimal place (`[0.0, 1.0, 0.0]`).
pub fn render_entry<W: Write>(sink: &mut W, entry: &Entry) -> io::Result<()> {
    match entry.value() {
        Value::Int(value) => write!(sink, "{value}"),
        Value::Text(text) => write!(sink, "'{text}'"),
        Value::Vector(values) => {
            write!(sink, "[")?;
            for (index, component) in values.iter().enumerate() {
                if index != 0 {
                    write!(sink, ", ")?;
                }
                write!(sink, "{component:.1}")?;
            }
            write!(sink, "]")
        }
    }
}

/// Render a collection as comma-separated entries in index order
pub fn render_entries<W: Write>(sink: &mut W, entries: &Entries) -> io::Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        if index != 0 {
            write!(sink, ", ")?;
        }
        render_entry(sink, entry)?;
    }
    Ok(())
}

/// Render one row with its 1-based row number
pub fn render_row<W: Write>(sink: &mut W, row: &Row, number: usize) -> io::Result<()> {
    write!(sink, "Row #{number}: Input [")?;
    render_entries(sink, row.inputs())?;
    write!(sink, "] - Output [")?;
    render_entries(sink, row.outputs())?;
    writeln!(sink, "]")
}

/// Render a whole dataset with header and footer rules
///
/// Rows are visited in insertion order and numbered from 1.
pub fn render_dataset<W: Write>(sink: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(sink, "{RULE}")?;
    writeln!(sink, "Dataset: # rows {}.", dataset.size())?;
    for (index, row) in dataset.iter().enumerate() {
        render_row(sink, row, index + 1)?;
    }
    writeln!(sink, "{RULE}")
}

/// Render a dataset into an owned string
pub fn dataset_to_string(dataset: &Dataset) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_dataset(&mut buffer, dataset);
    String::from_utf8_lossy(&buffer).into_owned()
}
