//! AquaFarm irrigation planner - backend server
//!
//! Serves the farm registry, crop catalog, irrigation scheduler, weather and
//! usage panels, and the AI schedule generator as a JSON API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod extract;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::TextGenerationClient;
use repository::{Catalog, SeedCatalog};
use services::{ScheduleGenerator, ScheduleStore, SharedScheduleStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn Catalog>,
    pub schedules: SharedScheduleStore,
    pub generator: Arc<ScheduleGenerator>,
}

impl AppState {
    /// State backed by the sample catalog
    pub fn new(config: Config) -> AppResult<Self> {
        Self::with_catalog(config, Arc::new(SeedCatalog::new()))
    }

    pub fn with_catalog(config: Config, catalog: Arc<dyn Catalog>) -> AppResult<Self> {
        let client = TextGenerationClient::new(&config.generation)?;
        let schedules = ScheduleStore::shared(catalog.initial_schedules());

        Ok(Self {
            config: Arc::new(config),
            catalog,
            schedules,
            generator: Arc::new(ScheduleGenerator::new(client)),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AquaFarm Irrigation Planner API v1.0"
}

/// Liveness check
async fn liveness() -> &'static str {
    "OK"
}
