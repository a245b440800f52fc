//! Drivers service

use crate::{
    error::AppResult,
    models::driver::{CreateDriver, Driver, UpdateDriver},
    repository::Repository,
};

#[derive(Clone)]
pub struct DriversService {
    repository: Repository,
}

impl DriversService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        self.repository.drivers.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Driver> {
        self.repository.drivers.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        self.repository.drivers.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateDriver) -> AppResult<Driver> {
        self.repository.drivers.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.drivers.delete(id).await
    }
}
