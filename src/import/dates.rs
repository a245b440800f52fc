//! Tolerant date parsing for heterogeneous spreadsheet cells.

use calamine::{Data, DataType};
use chrono::NaiveDate;

/// Formats attempted in order for textual dates. Day-first variants come
/// before month-first; the month-first pattern only gets a chance when the
/// day-first read is rejected as out of range.
const DATE_FORMATS: [&str; 4] = ["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Convert an arbitrary cell into a calendar date.
///
/// Total: absent, empty, or malformed input yields `None`, never an error.
/// Native Excel datetime cells contribute their date component; strings lose
/// any time-of-day suffix before the format list is tried.
pub fn parse_date(cell: Option<&Data>) -> Option<NaiveDate> {
    let cell = cell?;
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => cell.as_date(),
        other => {
            let text = other.to_string();
            let day_part = text.split(' ').next().unwrap_or("");
            if day_part.is_empty() {
                return None;
            }
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(day_part, fmt).ok())
        }
    }
}
