//! SiteFleet Equipment Tracking System
//!
//! A REST JSON API for tracking construction-site equipment, drivers, and
//! equipment requests, plus an Excel import pipeline that reconciles fleet
//! spreadsheet exports into the database.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
