//! Route definitions for the AquaFarm API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/navigation", get(handlers::get_navigation))
        .route("/dashboard", get(handlers::get_dashboard))
        .nest("/farms", farm_routes())
        .nest("/crops", crop_routes())
        .nest("/schedules", schedule_routes())
        .nest("/weather", weather_routes())
        .route("/usage", get(handlers::get_usage))
        .route("/generator/schedule", post(handlers::generate_schedule))
        .route("/planner", get(handlers::get_planner))
}

/// Farm registry routes
fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farms))
        .route("/:farm_id", get(handlers::get_farm))
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/categories", get(handlers::list_crop_categories))
        .route("/:crop_id", get(handlers::get_crop))
}

/// Irrigation schedule routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_schedules).post(handlers::create_schedule))
        .route("/farms", get(handlers::list_schedule_farms))
        .route(
            "/:schedule_id",
            get(handlers::get_schedule)
                .put(handlers::update_schedule)
                .delete(handlers::delete_schedule),
        )
        .route("/:schedule_id/form", get(handlers::get_schedule_form))
}

/// Weather panel routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_weather))
        .route("/locations", get(handlers::list_weather_locations))
}
