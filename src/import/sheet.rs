//! Tabular view over a worksheet: named columns plus data rows.
//!
//! Cells stay as `calamine::Data`; conversion to text or dates happens at
//! the point of use so that each resolver can apply its own coercion rules.

use calamine::Data;

/// A worksheet reduced to normalized column labels and data rows.
///
/// Column labels are not required to be unique: before duplicate-column
/// merging, several columns may share one canonical name, and
/// [`SheetTable::value`] resolves across all of them.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl SheetTable {
    /// First non-empty value among the candidate `keys`, in order.
    ///
    /// Each key is tried against every column carrying that label,
    /// left to right, so pre-merge duplicate columns are tolerated.
    pub fn value<'a>(&self, row: &'a [Data], keys: &[&str]) -> Option<&'a Data> {
        for key in keys {
            let cells = self
                .columns
                .iter()
                .enumerate()
                .filter(|(_, col)| col.as_str() == *key)
                .filter_map(|(idx, _)| row.get(idx));
            if let Some(cell) = first_non_empty(cells) {
                return Some(cell);
            }
        }
        None
    }

    /// Like [`SheetTable::value`] but rendered to text.
    pub fn text(&self, row: &[Data], keys: &[&str]) -> Option<String> {
        self.value(row, keys).map(|cell| cell.to_string())
    }

    /// Number of data rows with a non-empty value under `key`.
    pub fn count_non_empty(&self, key: &str) -> usize {
        self.rows
            .iter()
            .filter(|row| self.value(row, &[key]).is_some())
            .count()
    }
}

/// Empty, error, and empty-string cells all count as absent.
pub fn cell_is_empty(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Left-to-right precedence coalescing: the first non-empty cell wins.
/// Shared by row-level value resolution and duplicate-column merging.
pub fn first_non_empty<'a>(cells: impl IntoIterator<Item = &'a Data>) -> Option<&'a Data> {
    cells.into_iter().find(|cell| !cell_is_empty(cell))
}
