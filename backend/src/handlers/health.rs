//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub generation: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let generation = if state.config.generation.api_key.trim().is_empty() {
        "unconfigured"
    } else if state.generator.is_generating() {
        "busy"
    } else {
        "ready"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generation: generation.to_string(),
    })
}
