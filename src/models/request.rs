//! Equipment request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub request_id: i64,
    pub equipment_name: String,
    pub zone_department: Option<String>,
    pub shift_type: Option<String>,
    pub num_shifts: Option<i64>,
    /// pending / approved / rejected / fulfilled
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRequest {
    pub equipment_name: String,
    pub zone_department: Option<String>,
    pub shift_type: Option<String>,
    pub num_shifts: Option<i64>,
    pub notes: Option<String>,
}

/// Update request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub equipment_name: Option<String>,
    pub zone_department: Option<String>,
    pub shift_type: Option<String>,
    pub num_shifts: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
