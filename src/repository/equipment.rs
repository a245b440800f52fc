//! Equipment repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentWithDrivers, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all equipment joined with day/night driver contact info
    pub async fn list(&self) -> AppResult<Vec<EquipmentWithDrivers>> {
        let rows = sqlx::query_as::<_, EquipmentWithDrivers>(
            r#"
            SELECT e.equipment_id, e.asset_no, e.equipment_name, e.plate_serial_no,
                   e.shift_type, e.num_shifts_requested, e.status, e.zone_department,
                   e.mobilized_date, e.demobilization_date, e.company_supplier, e.remarks,
                   dd.driver_name AS day_shift_driver_name,
                   dd.phone_number AS day_shift_driver_phone,
                   nd.driver_name AS night_shift_driver_name,
                   nd.phone_number AS night_shift_driver_phone
            FROM equipment e
            LEFT JOIN drivers dd ON dd.day_shift_equipment_id = e.equipment_id
            LEFT JOIN drivers nd ON nd.night_shift_equipment_id = e.equipment_id
            ORDER BY e.equipment_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE equipment_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Find equipment by asset number (preferred natural key)
    pub async fn find_by_asset_no(&self, asset_no: &str) -> AppResult<Option<Equipment>> {
        let row = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE asset_no = $1")
            .bind(asset_no)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Find equipment by plate/serial number (fallback natural key)
    pub async fn find_by_plate_serial_no(&self, plate_serial_no: &str) -> AppResult<Option<Equipment>> {
        let row = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment WHERE plate_serial_no = $1",
        )
        .bind(plate_serial_no)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (asset_no, equipment_name, plate_serial_no, shift_type,
                                   num_shifts_requested, status, zone_department,
                                   mobilized_date, demobilization_date, company_supplier, remarks)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.asset_no)
        .bind(&data.equipment_name)
        .bind(&data.plate_serial_no)
        .bind(&data.shift_type)
        .bind(data.num_shifts_requested)
        .bind(&data.status)
        .bind(&data.zone_department)
        .bind(data.mobilized_date)
        .bind(data.demobilization_date)
        .bind(&data.company_supplier)
        .bind(&data.remarks)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Full-overwrite update used by the import reconciliation. All mutable
    /// fields are replaced; `asset_no` is left untouched and the caller is
    /// responsible for having already applied the shift-type and plate
    /// carry-over rules to `data`.
    pub async fn update_imported(&self, id: i64, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET equipment_name = $1, plate_serial_no = $2, shift_type = $3,
                num_shifts_requested = $4, status = $5, zone_department = $6,
                mobilized_date = $7, demobilization_date = $8,
                company_supplier = $9, remarks = $10
            WHERE equipment_id = $11
            RETURNING *
            "#,
        )
        .bind(&data.equipment_name)
        .bind(&data.plate_serial_no)
        .bind(&data.shift_type)
        .bind(data.num_shifts_requested)
        .bind(&data.status)
        .bind(&data.zone_department)
        .bind(data.mobilized_date)
        .bind(data.demobilization_date)
        .bind(&data.company_supplier)
        .bind(&data.remarks)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update (REST API)
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        let mut sets = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.asset_no, "asset_no");
        add_field!(data.equipment_name, "equipment_name");
        add_field!(data.plate_serial_no, "plate_serial_no");
        add_field!(data.shift_type, "shift_type");
        add_field!(data.num_shifts_requested, "num_shifts_requested");
        add_field!(data.status, "status");
        add_field!(data.zone_department, "zone_department");
        add_field!(data.mobilized_date, "mobilized_date");
        add_field!(data.demobilization_date, "demobilization_date");
        add_field!(data.company_supplier, "company_supplier");
        add_field!(data.remarks, "remarks");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE equipment SET {} WHERE equipment_id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.asset_no);
        bind_field!(data.equipment_name);
        bind_field!(data.plate_serial_no);
        bind_field!(data.shift_type);
        bind_field!(data.num_shifts_requested);
        bind_field!(data.status);
        bind_field!(data.zone_department);
        bind_field!(data.mobilized_date);
        bind_field!(data.demobilization_date);
        bind_field!(data.company_supplier);
        bind_field!(data.remarks);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE equipment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
