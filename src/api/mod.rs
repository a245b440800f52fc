//! API handlers for SiteFleet REST endpoints

pub mod drivers;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
