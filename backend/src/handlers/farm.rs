//! Farm registry HTTP handlers

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use shared::SearchResults;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::services::farm::{FarmCard, FarmDetail, FarmService};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

/// Search farms by name, location, or crop
pub async fn list_farms(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<SearchResults<FarmCard>> {
    let service = FarmService::new(state.catalog.clone());
    Json(service.search(&query.q))
}

/// Get a farm with its planner link
pub async fn get_farm(
    State(state): State<AppState>,
    ApiPath(farm_id): ApiPath<u32>,
) -> AppResult<Json<FarmDetail>> {
    let service = FarmService::new(state.catalog.clone());
    let farm = service.get_farm(farm_id)?;
    Ok(Json(farm))
}
