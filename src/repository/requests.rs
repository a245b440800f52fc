//! Equipment requests repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, Request, UpdateRequest},
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Sqlite>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all requests, newest first
    pub async fn list(&self) -> AppResult<Vec<Request>> {
        let rows = sqlx::query_as::<_, Request>(
            "SELECT * FROM requests ORDER BY created_at DESC, request_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Request> {
        sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE request_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Create request
    pub async fn create(&self, data: &CreateRequest) -> AppResult<Request> {
        let row = sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (equipment_name, zone_department, shift_type, num_shifts, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.equipment_name)
        .bind(&data.zone_department)
        .bind(&data.shift_type)
        .bind(data.num_shifts)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update (REST API)
    pub async fn update(&self, id: i64, data: &UpdateRequest) -> AppResult<Request> {
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

        add_field!(data.equipment_name, "equipment_name");
        add_field!(data.zone_department, "zone_department");
        add_field!(data.shift_type, "shift_type");
        add_field!(data.num_shifts, "num_shifts");
        add_field!(data.status, "status");
        add_field!(data.notes, "notes");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE requests SET {} WHERE request_id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Request>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.equipment_name);
        bind_field!(data.zone_department);
        bind_field!(data.shift_type);
        bind_field!(data.num_shifts);
        bind_field!(data.status);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Delete request
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM requests WHERE request_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }
        Ok(())
    }
}
