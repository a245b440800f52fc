//! Mapping of normalized sheet labels to canonical field names.
//!
//! The synonym table is a single ordered map so new sheet vocabulary can be
//! added without touching row logic. Several labels may map to the same
//! canonical field; the resulting duplicate columns are merged afterwards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::sheet::{first_non_empty, SheetTable};

/// Normalized sheet label -> canonical field name.
static RENAME_MAP: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        // equipment core
        ("assetno.", "asset_no"),
        ("assetno", "asset_no"),
        ("equipment", "equipment_name"),
        ("equipments", "equipment_name"),
        ("plateno/serialno", "plate_serial_no"),
        ("plateno", "plate_serial_no"),
        ("serialno", "plate_serial_no"),
        ("shift", "shift_type"),
        ("no.ofshiftsaspertherequest", "num_shifts_requested"),
        ("noofshiftsaspertherequest", "num_shifts_requested"),
        ("status", "status"),
        ("equipmentstatus", "status"),
        ("zone/department", "zone_department"),
        ("department", "zone_department"),
        ("mobilizeddate", "mobilized_date"),
        ("mobilized", "mobilized_date"),
        ("mobilisationdate", "mobilized_date"),
        // the sheet misspells "demobilization"
        ("demobizationexpecteddate", "demobilization_date"),
        ("demobilizationexpecteddate", "demobilization_date"),
        ("demobilizationdate", "demobilization_date"),
        ("company/supplier", "company_supplier"),
        ("supplier", "company_supplier"),
        ("remarks", "remarks"),
        // drivers: the day-shift contact columns carry a trailing dot in the
        // sheet, the night-shift ones do not
        ("dayshift", "day_shift_driver_name"),
        ("iqamano.", "day_iqama"),
        ("mobileno.", "day_phone"),
        ("nightshift", "night_shift_driver_name"),
        ("iqamano", "night_iqama"),
        ("mobileno", "night_phone"),
    ])
});

/// Rename known labels to canonical field names; unknown labels pass through
/// and are ignored downstream.
pub fn apply_rename(table: &mut SheetTable) {
    for col in &mut table.columns {
        if let Some(canonical) = RENAME_MAP.get(col.as_str()) {
            *col = (*canonical).to_string();
        }
    }
}

/// Merge columns that ended up with the same canonical name.
///
/// Per row, the first non-empty value left-to-right wins and lands in the
/// leftmost duplicate; the extra columns are dropped. Handles sheets with
/// split or repeated date-stamped status columns.
pub fn merge_duplicate_columns(table: &mut SheetTable) {
    let mut positions: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (idx, name) in table.columns.iter().enumerate() {
        positions.entry(name.clone()).or_default().push(idx);
    }
    if positions.values().all(|p| p.len() == 1) {
        return;
    }

    for row in &mut table.rows {
        for idxs in positions.values().filter(|p| p.len() > 1) {
            let first = idxs[0];
            let merged =
                first_non_empty(idxs.iter().filter_map(|&i| row.get(i))).cloned();
            if let Some(merged) = merged {
                row[first] = merged;
            }
        }
    }

    let mut keep: Vec<usize> = positions.values().map(|p| p[0]).collect();
    keep.sort_unstable();
    table.columns = keep.iter().map(|&i| table.columns[i].clone()).collect();
    for row in &mut table.rows {
        *row = keep
            .iter()
            .map(|&i| row.get(i).cloned().unwrap_or(calamine::Data::Empty))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_apply_rename_known_and_unknown() {
        let mut table = SheetTable {
            columns: vec![
                "assetno.".to_string(),
                "equipment".to_string(),
                "randomcolumn".to_string(),
            ],
            rows: vec![],
        };
        apply_rename(&mut table);
        assert_eq!(table.columns, vec!["asset_no", "equipment_name", "randomcolumn"]);
    }

    #[test]
    fn test_day_night_contact_columns() {
        let mut table = SheetTable {
            columns: vec![
                "dayshift".to_string(),
                "iqamano.".to_string(),
                "mobileno.".to_string(),
                "nightshift".to_string(),
                "iqamano".to_string(),
                "mobileno".to_string(),
            ],
            rows: vec![],
        };
        apply_rename(&mut table);
        assert_eq!(
            table.columns,
            vec![
                "day_shift_driver_name",
                "day_iqama",
                "day_phone",
                "night_shift_driver_name",
                "night_iqama",
                "night_phone"
            ]
        );
    }

    #[test]
    fn test_merge_duplicates_first_non_empty_wins() {
        let mut table = SheetTable {
            columns: vec![
                "plate_serial_no".to_string(),
                "status".to_string(),
                "plate_serial_no".to_string(),
            ],
            rows: vec![
                vec![Data::Empty, s("Working"), s("P-77")],
                vec![s("P-1"), Data::Empty, s("P-2")],
            ],
        };
        merge_duplicate_columns(&mut table);
        assert_eq!(table.columns, vec!["plate_serial_no", "status"]);
        assert_eq!(table.rows[0], vec![s("P-77"), s("Working")]);
        assert_eq!(table.rows[1], vec![s("P-1"), Data::Empty]);
    }

    #[test]
    fn test_merge_no_duplicates_is_noop() {
        let mut table = SheetTable {
            columns: vec!["asset_no".to_string(), "status".to_string()],
            rows: vec![vec![s("EQ-1"), s("Working")]],
        };
        merge_duplicate_columns(&mut table);
        assert_eq!(table.columns, vec!["asset_no", "status"]);
        assert_eq!(table.rows[0], vec![s("EQ-1"), s("Working")]);
    }
}
