//! Repository layer for database operations

pub mod drivers;
pub mod equipment;
pub mod requests;

use sqlx::{migrate::Migrator, Pool, Sqlite};

use crate::error::AppResult;

/// Migrations applied at server startup and after an import reset
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub equipment: equipment::EquipmentRepository,
    pub drivers: drivers::DriversRepository,
    pub requests: requests::RequestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            drivers: drivers::DriversRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Drop all tables and recreate the schema.
    ///
    /// The import is a full-replace batch operation: every run starts from an
    /// empty store. The migration ledger is dropped too so the migrator
    /// re-applies the schema from scratch.
    pub async fn reset_schema(&self) -> AppResult<()> {
        for table in ["drivers", "requests", "equipment", "_sqlx_migrations"] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
                .execute(&self.pool)
                .await?;
        }
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }
}
