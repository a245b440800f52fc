//! Import pipeline integration tests against an in-memory database.

use calamine::Data;
use sqlx::sqlite::SqlitePoolOptions;

use sitefleet_server::import::{columns, header, sheet::SheetTable, upsert};
use sitefleet_server::models::driver::Driver;
use sitefleet_server::repository::Repository;

async fn test_repository() -> Repository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory pool");
    let repository = Repository::new(pool);
    repository.reset_schema().await.expect("Failed to create schema");
    repository
}

fn s(v: &str) -> Data {
    Data::String(v.to_string())
}

/// Build a table the way the pipeline does: raw sheet labels normalized,
/// renamed to canonical fields, duplicates merged.
fn fleet_table(raw_labels: &[&str], rows: Vec<Vec<Data>>) -> SheetTable {
    let mut table = SheetTable {
        columns: raw_labels.iter().map(|l| header::normalize_label(l)).collect(),
        rows,
    };
    columns::apply_rename(&mut table);
    columns::merge_duplicate_columns(&mut table);
    table
}

const FLEET_LABELS: [&str; 10] = [
    "ASSET No.",
    "Equipment",
    "Plate No/Serial No",
    "Shift",
    "Status",
    "Day Shift",
    "Iqama No.",
    "Mobile No.",
    "Night Shift",
    "Iqama No",
];

fn row(cells: &[&str]) -> Vec<Data> {
    cells
        .iter()
        .map(|c| if c.is_empty() { Data::Empty } else { s(c) })
        .collect()
}

#[tokio::test]
async fn test_single_row_creates_equipment_and_day_driver() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![row(&[
            "EQ-100", "Excavator", "", "Day", "Working", "Ali", "123", "555", "", "",
        ])],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.equipment_inserted, 1);
    assert_eq!(summary.drivers_inserted, 1);
    assert_eq!(summary.rows_skipped, 0);

    let equipment = repository
        .equipment
        .find_by_asset_no("EQ-100")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(equipment.equipment_name.as_deref(), Some("Excavator"));
    assert_eq!(equipment.shift_type, "Day");
    assert_eq!(equipment.status.as_deref(), Some("Working"));

    let driver = repository
        .drivers
        .find_by_eqama("123")
        .await
        .expect("lookup")
        .expect("driver exists");
    assert_eq!(driver.driver_name, "Ali");
    assert_eq!(driver.phone_number, "555");
    assert_eq!(driver.day_shift_equipment_id, Some(equipment.equipment_id));
    assert_eq!(driver.night_shift_equipment_id, None);
}

#[tokio::test]
async fn test_rows_without_identifiers_are_skipped() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["", "Mystery Machine", "", "Day", "", "", "", "", "", ""]),
            row(&["EQ-1", "Loader", "", "", "", "", "", "", "", ""]),
        ],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.rows_skipped, 1);
    assert_eq!(summary.equipment_inserted, 1);

    let all = repository.equipment.list().await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].asset_no.as_deref(), Some("EQ-1"));
}

#[tokio::test]
async fn test_intra_run_duplicate_asset_updates_in_place() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["EQ-7", "Crane", "P-1", "Day", "Working", "", "", "", "", ""]),
            row(&["EQ-7", "Crane 50T", "P-2", "Night", "Standby", "", "", "", "", ""]),
        ],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.equipment_inserted, 1);
    assert_eq!(summary.equipment_updated, 1);

    let equipment = repository
        .equipment
        .find_by_asset_no("EQ-7")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(equipment.equipment_name.as_deref(), Some("Crane 50T"));
    assert_eq!(equipment.plate_serial_no.as_deref(), Some("P-2"));
    assert_eq!(equipment.shift_type, "Night");
    assert_eq!(equipment.status.as_deref(), Some("Standby"));
}

#[tokio::test]
async fn test_plate_serial_fallback_identity() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["EQ-9", "Dozer", "PL-44", "Day", "", "", "", "", "", ""]),
            // no asset number, but the plate matches the row above
            row(&["", "Dozer D8", "PL-44", "", "", "", "", "", "", ""]),
        ],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.equipment_inserted, 1);
    assert_eq!(summary.equipment_updated, 1);

    let equipment = repository
        .equipment
        .find_by_plate_serial_no("PL-44")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(equipment.asset_no.as_deref(), Some("EQ-9"));
    assert_eq!(equipment.equipment_name.as_deref(), Some("Dozer D8"));
}

#[tokio::test]
async fn test_shift_type_never_regresses_to_empty() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["EQ-2", "Grader", "", "Day", "", "", "", "", "", ""]),
            // low-information second row for the same asset, no shift value
            row(&["EQ-2", "Grader", "", "", "", "", "", "", "", ""]),
        ],
    );

    upsert::import_rows(&repository, &table).await.expect("import");

    let equipment = repository
        .equipment
        .find_by_asset_no("EQ-2")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(equipment.shift_type, "Day");
}

#[tokio::test]
async fn test_driver_relinked_to_latest_equipment() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["EQ-10", "Truck", "", "Day", "", "Hassan", "900", "111", "", ""]),
            row(&["EQ-11", "Truck", "", "Day", "", "Hassan", "900", "222", "", ""]),
        ],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.drivers_inserted, 1);
    assert_eq!(summary.drivers_updated, 1);

    let eq11 = repository
        .equipment
        .find_by_asset_no("EQ-11")
        .await
        .expect("lookup")
        .expect("equipment exists");
    let driver = repository
        .drivers
        .find_by_eqama("900")
        .await
        .expect("lookup")
        .expect("driver exists");
    assert_eq!(driver.day_shift_equipment_id, Some(eq11.equipment_id));
    assert_eq!(driver.phone_number, "222");

    let drivers: Vec<Driver> = repository.drivers.list().await.expect("list");
    assert_eq!(drivers.len(), 1);
}

#[tokio::test]
async fn test_driver_requires_name_and_contact() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            // name but neither iqama nor phone
            row(&["EQ-20", "Roller", "", "", "", "Omar", "", "", "", ""]),
            // iqama but no name
            row(&["EQ-21", "Roller", "", "", "", "", "777", "", "", ""]),
        ],
    );

    let summary = upsert::import_rows(&repository, &table).await.expect("import");
    assert_eq!(summary.drivers_inserted, 0);
    assert!(repository.drivers.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_night_driver_uses_night_slot() {
    let repository = test_repository().await;
    let labels = [
        "ASSET No.",
        "Equipment",
        "Night Shift",
        "Iqama No",
        "Mobile No",
    ];
    let table = fleet_table(
        &labels,
        vec![row(&["EQ-30", "Pump", "Saeed", "321", "444"])],
    );

    upsert::import_rows(&repository, &table).await.expect("import");

    let equipment = repository
        .equipment
        .find_by_asset_no("EQ-30")
        .await
        .expect("lookup")
        .expect("equipment exists");
    let driver = repository
        .drivers
        .find_by_eqama("321")
        .await
        .expect("lookup")
        .expect("driver exists");
    assert_eq!(driver.night_shift_equipment_id, Some(equipment.equipment_id));
    assert_eq!(driver.day_shift_equipment_id, None);
}

#[tokio::test]
async fn test_dated_status_columns_rightmost_wins() {
    let repository = test_repository().await;
    let labels = ["ASSET No.", "Equipment", "Status 2025/3/1", "Status 2025/9/20"];
    let table = fleet_table(
        &labels,
        vec![
            row(&["EQ-40", "Mixer", "Standby", "Working"]),
            row(&["EQ-41", "Mixer", "Standby", ""]),
        ],
    );

    upsert::import_rows(&repository, &table).await.expect("import");

    let eq40 = repository
        .equipment
        .find_by_asset_no("EQ-40")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(eq40.status.as_deref(), Some("Working"));

    let eq41 = repository
        .equipment
        .find_by_asset_no("EQ-41")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(eq41.status.as_deref(), Some("Standby"));
}

#[tokio::test]
async fn test_full_run_is_idempotent_after_reset() {
    let repository = test_repository().await;
    let table = fleet_table(
        &FLEET_LABELS,
        vec![
            row(&["EQ-1", "Excavator", "P-1", "Day", "Working", "Ali", "123", "555", "", ""]),
            row(&["EQ-2", "Loader", "P-2", "Night", "Standby", "", "", "", "Samir", "456"]),
            row(&["", "", "", "", "", "", "", "", "", ""]),
        ],
    );

    let first = upsert::import_rows(&repository, &table).await.expect("first run");
    let first_equipment = repository.equipment.list().await.expect("list");
    let first_drivers = repository.drivers.list().await.expect("list");

    repository.reset_schema().await.expect("reset");

    let second = upsert::import_rows(&repository, &table).await.expect("second run");
    let second_equipment = repository.equipment.list().await.expect("list");
    let second_drivers = repository.drivers.list().await.expect("list");

    assert_eq!(first, second);
    assert_eq!(first_equipment.len(), second_equipment.len());
    assert_eq!(first_drivers.len(), second_drivers.len());
    for (a, b) in first_equipment.iter().zip(&second_equipment) {
        assert_eq!(a.asset_no, b.asset_no);
        assert_eq!(a.equipment_name, b.equipment_name);
        assert_eq!(a.shift_type, b.shift_type);
        assert_eq!(a.status, b.status);
    }
    for (a, b) in first_drivers.iter().zip(&second_drivers) {
        assert_eq!(a.eqama_number, b.eqama_number);
        assert_eq!(a.driver_name, b.driver_name);
        assert_eq!(a.phone_number, b.phone_number);
    }
}

#[tokio::test]
async fn test_numeric_cells_round_trip_as_text() {
    let repository = test_repository().await;
    let labels = [
        "ASSET No.",
        "Equipment",
        "No. of shifts as per the request",
    ];
    let table = fleet_table(
        &labels,
        vec![vec![Data::Float(10234.0), s("Telehandler"), Data::Float(2.0)]],
    );

    upsert::import_rows(&repository, &table).await.expect("import");

    let equipment = repository
        .equipment
        .find_by_asset_no("10234")
        .await
        .expect("lookup")
        .expect("equipment exists");
    assert_eq!(equipment.num_shifts_requested, Some(2));
}
