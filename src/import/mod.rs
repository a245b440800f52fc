//! Excel import reconciliation pipeline.
//!
//! One-off batch job: detect the header row of the fleet sheet, canonicalize
//! its column vocabulary, then upsert equipment and driver records keyed on
//! their natural identifiers. The caller resets the schema first; the run is
//! a full replace, not an incremental merge.

pub mod columns;
pub mod dates;
pub mod header;
pub mod sheet;
pub mod upsert;

pub use upsert::ImportSummary;

use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// Run the whole pipeline against the workbook at `excel_path`.
///
/// Reads the first sheet, locates and normalizes the header, applies the
/// synonym table, merges duplicate columns, then reconciles rows into the
/// store. Returns the run counters.
pub async fn run_import(repository: &Repository, excel_path: &Path) -> AppResult<ImportSummary> {
    tracing::info!("Loading Excel file: {}", excel_path.display());

    let mut workbook = open_workbook_auto(excel_path).map_err(|e| {
        AppError::Import(format!("Failed to open {}: {}", excel_path.display(), e))
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or_else(|| AppError::Import("Workbook has no sheets".to_string()))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Import(format!("Failed to read sheet {}: {}", sheet_name, e)))?;

    let mut table = header::locate_header(&range);
    columns::apply_rename(&mut table);
    columns::merge_duplicate_columns(&mut table);

    tracing::info!("Final columns after rename: {:?}", table.columns);
    tracing::info!(
        "Non-empty asset_no rows: {}, non-empty plate_serial_no rows: {}",
        table.count_non_empty("asset_no"),
        table.count_non_empty("plate_serial_no")
    );

    upsert::import_rows(repository, &table).await
}
