//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{drivers, equipment, health, requests};
use crate::error::ErrorResponse;
use crate::models::driver::{CreateDriver, Driver, UpdateDriver};
use crate::models::equipment::{CreateEquipment, Equipment, EquipmentWithDrivers, UpdateEquipment};
use crate::models::request::{CreateRequest, Request, UpdateRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SiteFleet API",
        description = "Construction Site Equipment Tracking REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Drivers
        drivers::list_drivers,
        drivers::get_driver,
        drivers::create_driver,
        drivers::update_driver,
        drivers::delete_driver,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::delete_request,
    ),
    components(schemas(
        health::HealthResponse,
        ErrorResponse,
        Equipment,
        EquipmentWithDrivers,
        CreateEquipment,
        UpdateEquipment,
        Driver,
        CreateDriver,
        UpdateDriver,
        Request,
        CreateRequest,
        UpdateRequest,
    ))
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
