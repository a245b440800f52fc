//! Header normalization and heuristic header-row detection.
//!
//! Export position of the header row is not stable across revisions of the
//! fleet sheet, so the locator probes the usual offsets first and falls back
//! to scanning. It never fails: worst case the first row becomes the header.

use calamine::{Data, Range};

use super::sheet::SheetTable;

/// Keywords expected somewhere in a genuine header row.
const HEADER_HINTS: [&str; 7] = [
    "asset",
    "equipment",
    "plate",
    "serial",
    "zone",
    "department",
    "shift",
];

/// Header-row offsets seen in practice, most common first.
const FIXED_HEADER_ROWS: [usize; 4] = [3, 2, 1, 0];

/// How many leading rows the fallback scan inspects.
const SCAN_ROW_LIMIT: usize = 20;

/// A candidate header must contain at least this many distinct hints.
const MIN_HINT_MATCHES: usize = 2;

/// Canonicalize a raw header label: strip NBSP and RTL marks, collapse
/// whitespace, trim, lower-case, then drop the remaining spaces.
/// Total and idempotent.
pub fn normalize_label(raw: &str) -> String {
    let s = raw.replace('\u{a0}', " ").replace('\u{200f}', "");
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase().replace(' ', "")
}

/// Normalize a header cell of any type; non-string cells are stringified.
pub fn normalize_header(cell: &Data) -> String {
    normalize_label(&cell.to_string())
}

fn hint_matches(labels: &[String]) -> usize {
    let joined = labels.join(" ");
    HEADER_HINTS.iter().filter(|h| joined.contains(*h)).count()
}

/// Interpret `header_row` as the header and everything below it as data.
/// `None` when the sheet has no such row.
fn table_with_header(range: &Range<Data>, header_row: usize) -> Option<SheetTable> {
    let mut rows = range.rows();
    let header = rows.nth(header_row)?;
    let columns: Vec<String> = header.iter().map(normalize_header).collect();
    let data: Vec<Vec<Data>> = rows.map(<[Data]>::to_vec).collect();
    Some(SheetTable {
        columns,
        rows: data,
    })
}

/// Find the header row and return the sheet as a [`SheetTable`] with
/// normalized column labels.
///
/// Tries the usual fixed offsets, then scans the first [`SCAN_ROW_LIMIT`]
/// rows, then degrades to treating row 0 as the header. Best-effort detector,
/// not a validator.
pub fn locate_header(range: &Range<Data>) -> SheetTable {
    // 1) Try common header rows first
    for hdr in FIXED_HEADER_ROWS {
        if let Some(table) = table_with_header(range, hdr) {
            tracing::debug!("Candidate header row {}: {:?}", hdr, table.columns);
            if hint_matches(&table.columns) >= MIN_HINT_MATCHES {
                tracing::info!("Using header row {} ({} columns)", hdr, table.columns.len());
                return table;
            }
        }
    }

    // 2) Fallback: scan leading rows for one that looks like a header
    for (i, row) in range.rows().take(SCAN_ROW_LIMIT).enumerate() {
        let labels: Vec<String> = row.iter().map(normalize_header).collect();
        if hint_matches(&labels) >= MIN_HINT_MATCHES {
            if let Some(table) = table_with_header(range, i) {
                tracing::info!("Detected header row at index {}", i);
                return table;
            }
        }
    }

    // 3) No good header anywhere; degrade to the first row
    tracing::warn!("No suitable header row detected; using first row as header");
    table_with_header(range, 0).unwrap_or_default()
}
