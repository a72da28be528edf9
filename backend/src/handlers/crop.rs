//! Crop catalog HTTP handlers

use axum::{
    extract::State,
    Json,
};
use shared::SearchResults;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::handlers::farm::SearchQuery;
use crate::services::crop::{CropCard, CropService};
use crate::AppState;

/// Search crops by name and category
pub async fn list_crops(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> AppResult<Json<SearchResults<CropCard>>> {
    let service = CropService::new(state.catalog.clone());
    let results = service.search(&query.q, query.category.as_deref())?;
    Ok(Json(results))
}

/// Category selector values, "All" first
pub async fn list_crop_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let service = CropService::new(state.catalog.clone());
    Json(service.categories())
}

/// Get a crop
pub async fn get_crop(
    State(state): State<AppState>,
    ApiPath(crop_id): ApiPath<u32>,
) -> AppResult<Json<CropCard>> {
    let service = CropService::new(state.catalog.clone());
    let crop = service.get_crop(crop_id)?;
    Ok(Json(crop))
}
