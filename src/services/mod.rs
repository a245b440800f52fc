//! Business logic services

pub mod drivers;
pub mod equipment;
pub mod requests;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub drivers: drivers::DriversService,
    pub requests: requests::RequestsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            drivers: drivers::DriversService::new(repository.clone()),
            requests: requests::RequestsService::new(repository),
        }
    }
}
