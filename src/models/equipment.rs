//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub equipment_id: i64,
    /// Asset number (preferred natural key)
    pub asset_no: Option<String>,
    /// Equipment name / description
    pub equipment_name: Option<String>,
    /// Plate or serial number (fallback natural key)
    pub plate_serial_no: Option<String>,
    /// Day/Night shift assignment; empty string when unknown
    pub shift_type: String,
    /// Number of shifts as per the request
    pub num_shifts_requested: Option<i64>,
    pub status: Option<String>,
    pub zone_department: Option<String>,
    pub mobilized_date: Option<NaiveDate>,
    pub demobilization_date: Option<NaiveDate>,
    pub company_supplier: Option<String>,
    pub remarks: Option<String>,
}

/// Equipment row joined with its day/night driver contact info,
/// the shape the frontend list view consumes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentWithDrivers {
    pub equipment_id: i64,
    pub asset_no: Option<String>,
    pub equipment_name: Option<String>,
    pub plate_serial_no: Option<String>,
    pub shift_type: String,
    pub num_shifts_requested: Option<i64>,
    pub status: Option<String>,
    pub zone_department: Option<String>,
    pub mobilized_date: Option<NaiveDate>,
    pub demobilization_date: Option<NaiveDate>,
    pub company_supplier: Option<String>,
    pub remarks: Option<String>,
    pub day_shift_driver_name: Option<String>,
    pub day_shift_driver_phone: Option<String>,
    pub night_shift_driver_name: Option<String>,
    pub night_shift_driver_phone: Option<String>,
}

/// Create equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub asset_no: Option<String>,
    pub equipment_name: Option<String>,
    pub plate_serial_no: Option<String>,
    #[serde(default)]
    pub shift_type: String,
    pub num_shifts_requested: Option<i64>,
    pub status: Option<String>,
    pub zone_department: Option<String>,
    pub mobilized_date: Option<NaiveDate>,
    pub demobilization_date: Option<NaiveDate>,
    pub company_supplier: Option<String>,
    pub remarks: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub asset_no: Option<String>,
    pub equipment_name: Option<String>,
    pub plate_serial_no: Option<String>,
    pub shift_type: Option<String>,
    pub num_shifts_requested: Option<i64>,
    pub status: Option<String>,
    pub zone_department: Option<String>,
    pub mobilized_date: Option<NaiveDate>,
    pub demobilization_date: Option<NaiveDate>,
    pub company_supplier: Option<String>,
    pub remarks: Option<String>,
}
