//! Row-by-row reconciliation of sheet data into equipment and driver records.
//!
//! Equipment identity is the asset number, falling back to the plate/serial
//! number; drivers are keyed on their identity-document number. Each row
//! persists its equipment change before touching drivers so the foreign keys
//! always reference a committed equipment id.

use calamine::Data;

use crate::{
    error::AppResult,
    models::{
        driver::{CreateDriver, ShiftSlot},
        equipment::CreateEquipment,
    },
    repository::Repository,
};

use super::{
    dates::parse_date,
    sheet::{first_non_empty, SheetTable},
};

/// Outcome counters for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub equipment_inserted: usize,
    pub equipment_updated: usize,
    pub drivers_inserted: usize,
    pub drivers_updated: usize,
    pub rows_skipped: usize,
    pub rows_failed: usize,
}

enum RowOutcome {
    Processed,
    Skipped,
}

/// Reconcile every data row of `table` into the store, in source order.
///
/// A fault while processing one row is logged and counted; the run continues
/// with the next row. Rows committed earlier stay committed.
pub async fn import_rows(repository: &Repository, table: &SheetTable) -> AppResult<ImportSummary> {
    let mut summary = ImportSummary::default();

    // Date-stamped variants like `status2025/9/20`; rightmost is most recent.
    let status_cols: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.starts_with("status"))
        .map(|(i, _)| i)
        .collect();

    for (row_idx, row) in table.rows.iter().enumerate() {
        match process_row(repository, table, &status_cols, row, &mut summary).await {
            Ok(RowOutcome::Processed) => {}
            Ok(RowOutcome::Skipped) => summary.rows_skipped += 1,
            Err(e) => {
                summary.rows_failed += 1;
                tracing::warn!("Row {}: skipped after error: {}", row_idx, e);
            }
        }
    }

    tracing::info!(
        "Equipment rows inserted: {}, updated: {}",
        summary.equipment_inserted,
        summary.equipment_updated
    );
    tracing::info!(
        "Driver rows inserted: {}, updated: {}",
        summary.drivers_inserted,
        summary.drivers_updated
    );
    if summary.rows_skipped > 0 || summary.rows_failed > 0 {
        tracing::info!(
            "Rows without identifiers: {}, rows failed: {}",
            summary.rows_skipped,
            summary.rows_failed
        );
    }

    Ok(summary)
}

async fn process_row(
    repository: &Repository,
    table: &SheetTable,
    status_cols: &[usize],
    row: &[Data],
    summary: &mut ImportSummary,
) -> AppResult<RowOutcome> {
    let asset_no = table.text(row, &["asset_no"]);
    let plate_no = table.text(row, &["plate_serial_no"]);

    // rows without identifiers cannot be reconciled
    if asset_no.is_none() && plate_no.is_none() {
        return Ok(RowOutcome::Skipped);
    }

    let status_value = table
        .text(row, &["status"])
        .or_else(|| derive_status(status_cols, row));
    let shift_value = table.text(row, &["shift_type"]).unwrap_or_default();
    let shifts_requested = table
        .value(row, &["num_shifts_requested"])
        .and_then(cell_to_int);

    let fields = CreateEquipment {
        asset_no: asset_no.clone(),
        equipment_name: table.text(row, &["equipment_name"]),
        plate_serial_no: plate_no.clone(),
        shift_type: shift_value,
        num_shifts_requested: shifts_requested,
        status: status_value,
        zone_department: table.text(row, &["zone_department"]),
        mobilized_date: parse_date(table.value(row, &["mobilized_date"])),
        demobilization_date: parse_date(table.value(row, &["demobilization_date"])),
        company_supplier: table.text(row, &["company_supplier"]),
        remarks: table.text(row, &["remarks"]),
    };

    // Identity lookup: asset number first, plate/serial as fallback
    let mut existing = None;
    if let Some(asset) = asset_no.as_deref() {
        existing = repository.equipment.find_by_asset_no(asset).await?;
    }
    if existing.is_none() {
        if let Some(plate) = plate_no.as_deref() {
            existing = repository.equipment.find_by_plate_serial_no(plate).await?;
        }
    }

    // Equipment must be persisted before drivers reference it
    let equipment = match existing {
        None => {
            let created = repository.equipment.create(&fields).await?;
            summary.equipment_inserted += 1;
            created
        }
        Some(current) => {
            let mut update = fields;
            if update.plate_serial_no.is_none() {
                update.plate_serial_no = current.plate_serial_no.clone();
            }
            // a low-information row must not blank out a known shift
            if update.shift_type.is_empty() {
                update.shift_type = current.shift_type.clone();
            }
            let updated = repository
                .equipment
                .update_imported(current.equipment_id, &update)
                .await?;
            summary.equipment_updated += 1;
            updated
        }
    };

    upsert_driver(repository, table, row, ShiftSlot::Day, equipment.equipment_id, summary).await?;
    upsert_driver(repository, table, row, ShiftSlot::Night, equipment.equipment_id, summary).await?;

    Ok(RowOutcome::Processed)
}

/// Most recent non-empty value across the date-stamped status columns,
/// rightmost column first.
fn derive_status(status_cols: &[usize], row: &[Data]) -> Option<String> {
    first_non_empty(status_cols.iter().rev().filter_map(|&i| row.get(i))).map(Data::to_string)
}

/// Integer coercion for the requested-shifts column; anything that does not
/// read cleanly as an integer becomes absent.
fn cell_to_int(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.is_finite() => Some(*f as i64),
        Data::Bool(b) => Some(i64::from(*b)),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Create or update the driver for one shift slot of the current row.
///
/// Requires a driver name plus at least one of identity number / phone.
/// A driver already known under the same identity number is updated and
/// repointed to this row's equipment, not duplicated.
async fn upsert_driver(
    repository: &Repository,
    table: &SheetTable,
    row: &[Data],
    slot: ShiftSlot,
    equipment_id: i64,
    summary: &mut ImportSummary,
) -> AppResult<()> {
    let (name_key, iqama_key, phone_key) = match slot {
        ShiftSlot::Day => ("day_shift_driver_name", "day_iqama", "day_phone"),
        ShiftSlot::Night => ("night_shift_driver_name", "night_iqama", "night_phone"),
    };

    let Some(name) = table.text(row, &[name_key]) else {
        return Ok(());
    };
    let iqama = table.text(row, &[iqama_key]);
    let phone = table.text(row, &[phone_key]);
    if iqama.is_none() && phone.is_none() {
        return Ok(());
    }

    let eqama = iqama.unwrap_or_default();
    let phone = phone.unwrap_or_default();

    match repository.drivers.find_by_eqama(&eqama).await? {
        None => {
            let data = CreateDriver {
                driver_name: name,
                phone_number: phone,
                eqama_number: eqama,
                day_shift_equipment_id: (slot == ShiftSlot::Day).then_some(equipment_id),
                night_shift_equipment_id: (slot == ShiftSlot::Night).then_some(equipment_id),
            };
            repository.drivers.create(&data).await?;
            summary.drivers_inserted += 1;
        }
        Some(driver) => {
            repository
                .drivers
                .update_imported(driver.driver_id, &name, &phone, slot, equipment_id)
                .await?;
            summary.drivers_updated += 1;
        }
    }

    Ok(())
}
