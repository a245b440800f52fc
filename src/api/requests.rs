//! Equipment requests API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::request::{CreateRequest, Request, UpdateRequest};
use crate::{error::AppResult, AppState};

/// List all equipment requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Request list", body = Vec<Request>)
    )
)]
pub async fn list_requests(State(state): State<AppState>) -> AppResult<Json<Vec<Request>>> {
    let requests = state.services.requests.list().await?;
    Ok(Json(requests))
}

/// Get request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i64, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = Request)
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Request>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// Create request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = Request)
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<Request>)> {
    let request = state.services.requests.create(&data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update request
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i64, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = Request)
    )
)]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateRequest>,
) -> AppResult<Json<Request>> {
    let request = state.services.requests.update(id, &data).await?;
    Ok(Json(request))
}

/// Delete request
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i64, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Request deleted")
    )
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.requests.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
