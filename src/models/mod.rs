//! Data models for SiteFleet

pub mod driver;
pub mod equipment;
pub mod request;

// Re-export commonly used types
pub use driver::Driver;
pub use equipment::{Equipment, EquipmentWithDrivers};
pub use request::Request;
