//! Drivers API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::driver::{CreateDriver, Driver, UpdateDriver};
use crate::{error::AppResult, AppState};

/// List all drivers
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "drivers",
    responses(
        (status = 200, description = "Driver list", body = Vec<Driver>)
    )
)]
pub async fn list_drivers(State(state): State<AppState>) -> AppResult<Json<Vec<Driver>>> {
    let drivers = state.services.drivers.list().await?;
    Ok(Json(drivers))
}

/// Get driver by ID
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver details", body = Driver)
    )
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Driver>> {
    let driver = state.services.drivers.get_by_id(id).await?;
    Ok(Json(driver))
}

/// Create driver
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "drivers",
    request_body = CreateDriver,
    responses(
        (status = 201, description = "Driver created", body = Driver)
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(data): Json<CreateDriver>,
) -> AppResult<(StatusCode, Json<Driver>)> {
    let driver = state.services.drivers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// Update driver
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    request_body = UpdateDriver,
    responses(
        (status = 200, description = "Driver updated", body = Driver)
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateDriver>,
) -> AppResult<Json<Driver>> {
    let driver = state.services.drivers.update(id, &data).await?;
    Ok(Json(driver))
}

/// Delete driver
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 204, description = "Driver deleted")
    )
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.drivers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
