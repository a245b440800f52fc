//! SiteFleet Server - Construction Site Equipment Tracking
//!
//! REST API server over the equipment/driver/request store, also serving the
//! built frontend bundle with an index fallback for client-side routes.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitefleet_server::{
    api,
    config::AppConfig,
    repository::{Repository, MIGRATOR},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("sitefleet_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SiteFleet Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let connect_options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_with(connect_options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    MIGRATOR.run(&pool).await?;

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.static_files.dir.clone();

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Drivers
        .route("/drivers", get(api::drivers::list_drivers))
        .route("/drivers", post(api::drivers::create_driver))
        .route("/drivers/:id", get(api::drivers::get_driver))
        .route("/drivers/:id", put(api::drivers::update_driver))
        .route("/drivers/:id", delete(api::drivers::delete_driver))
        // Requests
        .route("/requests", get(api::requests::list_requests))
        .route("/requests", post(api::requests::create_request))
        .route("/requests/:id", get(api::requests::get_request))
        .route("/requests/:id", put(api::requests::update_request))
        .route("/requests/:id", delete(api::requests::delete_request))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    // SPA: serve the built frontend, falling back to index.html so
    // client-side routes (/equipment, /drivers, ...) resolve
    let index = format!("{}/index.html", static_dir);
    let spa = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
