//! Drivers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::driver::{CreateDriver, Driver, ShiftSlot, UpdateDriver},
};

#[derive(Clone)]
pub struct DriversRepository {
    pool: Pool<Sqlite>,
}

impl DriversRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all drivers
    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        let rows = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY driver_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get driver by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driver_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Find driver by identity-document number (natural key)
    pub async fn find_by_eqama(&self, eqama_number: &str) -> AppResult<Option<Driver>> {
        let row = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE eqama_number = $1")
            .bind(eqama_number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create driver
    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        let row = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (driver_name, phone_number, eqama_number,
                                 day_shift_equipment_id, night_shift_equipment_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.driver_name)
        .bind(&data.phone_number)
        .bind(&data.eqama_number)
        .bind(data.day_shift_equipment_id)
        .bind(data.night_shift_equipment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update name/phone and repoint one shift slot to new equipment.
    /// Used by the import reconciliation when a known identity number shows
    /// up again on a later row.
    pub async fn update_imported(
        &self,
        driver_id: i64,
        driver_name: &str,
        phone_number: &str,
        slot: ShiftSlot,
        equipment_id: i64,
    ) -> AppResult<()> {
        let query = format!(
            "UPDATE drivers SET driver_name = $1, phone_number = $2, {} = $3 WHERE driver_id = $4",
            slot.column()
        );
        sqlx::query(&query)
            .bind(driver_name)
            .bind(phone_number)
            .bind(equipment_id)
            .bind(driver_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Partial update (REST API)
    pub async fn update(&self, id: i64, data: &UpdateDriver) -> AppResult<Driver> {
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

        add_field!(data.driver_name, "driver_name");
        add_field!(data.phone_number, "phone_number");
        add_field!(data.eqama_number, "eqama_number");
        add_field!(data.day_shift_equipment_id, "day_shift_equipment_id");
        add_field!(data.night_shift_equipment_id, "night_shift_equipment_id");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE drivers SET {} WHERE driver_id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Driver>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.driver_name);
        bind_field!(data.phone_number);
        bind_field!(data.eqama_number);
        bind_field!(data.day_shift_equipment_id);
        bind_field!(data.night_shift_equipment_id);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Delete driver
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM drivers WHERE driver_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Driver {} not found", id)));
        }
        Ok(())
    }
}
