//! Driver model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The two mutually exclusive equipment-assignment slots on a driver row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftSlot {
    Day,
    Night,
}

impl ShiftSlot {
    /// Name of the foreign-key column backing this slot
    pub fn column(self) -> &'static str {
        match self {
            ShiftSlot::Day => "day_shift_equipment_id",
            ShiftSlot::Night => "night_shift_equipment_id",
        }
    }
}

/// Driver record. A driver is linked to equipment through exactly one of
/// the two shift slots; `eqama_number` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Driver {
    pub driver_id: i64,
    pub driver_name: String,
    pub phone_number: String,
    /// Identity-document number, unique across drivers
    pub eqama_number: String,
    pub day_shift_equipment_id: Option<i64>,
    pub night_shift_equipment_id: Option<i64>,
}

/// Create driver request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDriver {
    pub driver_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub eqama_number: String,
    pub day_shift_equipment_id: Option<i64>,
    pub night_shift_equipment_id: Option<i64>,
}

/// Update driver request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDriver {
    pub driver_name: Option<String>,
    pub phone_number: Option<String>,
    pub eqama_number: Option<String>,
    pub day_shift_equipment_id: Option<i64>,
    pub night_shift_equipment_id: Option<i64>,
}
