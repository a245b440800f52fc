//! One-off Excel-to-database import for the fleet sheet.
//!
//! Full-replace batch run: drops and recreates the schema, then reconciles
//! every sheet row into equipment and driver records. Assumes exclusive
//! ownership of the database file while it runs.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitefleet_server::{config::AppConfig, import, repository::Repository};

#[derive(Parser)]
#[command(
    name = "import-excel",
    about = "Import the fleet Excel sheet into the equipment database"
)]
struct Args {
    /// Path to the .xlsx export
    excel_file: PathBuf,

    /// Override the configured database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("sitefleet_server={}", config.logging.level).into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fatal before any mutation: nothing is dropped for a file that isn't there
    if !args.excel_file.exists() {
        anyhow::bail!("Path not found: {}", args.excel_file.display());
    }

    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database.url.clone());
    tracing::info!("Excel file path used: {}", args.excel_file.display());
    tracing::info!("Database URL: {}", database_url);

    let connect_options =
        SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    let repository = Repository::new(pool);

    // Reset tables then import
    repository.reset_schema().await?;

    let summary = import::run_import(&repository, &args.excel_file).await?;

    tracing::info!(
        "Import completed successfully: {} equipment inserted, {} updated; {} drivers inserted, {} updated; {} rows skipped, {} failed",
        summary.equipment_inserted,
        summary.equipment_updated,
        summary.drivers_inserted,
        summary.drivers_updated,
        summary.rows_skipped,
        summary.rows_failed
    );

    Ok(())
}
