//! Irrigation schedule HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{ScheduleBoard, ScheduleEntry, ScheduleForm};
use shared::FarmFilter;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::services::ScheduleService;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub farm: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Upcoming and history schedules, filtered by farm
pub async fn list_schedules(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BoardQuery>,
) -> Json<ScheduleBoard> {
    let service = ScheduleService::new(state.schedules.clone());
    let filter = FarmFilter::from_param(query.farm.as_deref());
    Json(service.board(filter).await)
}

/// Farm options of the schedule form
pub async fn list_schedule_farms(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.farm_names())
}

/// Create a schedule entry
pub async fn create_schedule(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ScheduleForm>,
) -> impl IntoResponse {
    let service = ScheduleService::new(state.schedules.clone());
    let today = Utc::now().date_naive();

    match service.create(form, today).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a schedule entry
pub async fn get_schedule(
    State(state): State<AppState>,
    ApiPath(schedule_id): ApiPath<u32>,
) -> AppResult<Json<ScheduleEntry>> {
    let service = ScheduleService::new(state.schedules.clone());
    let entry = service.get(schedule_id).await?;
    Ok(Json(entry))
}

/// Edit form prefilled from a schedule entry
pub async fn get_schedule_form(
    State(state): State<AppState>,
    ApiPath(schedule_id): ApiPath<u32>,
) -> AppResult<Json<ScheduleForm>> {
    let service = ScheduleService::new(state.schedules.clone());
    let form = service.form_for(schedule_id).await?;
    Ok(Json(form))
}

/// Update a schedule entry
pub async fn update_schedule(
    State(state): State<AppState>,
    ApiPath(schedule_id): ApiPath<u32>,
    ApiJson(form): ApiJson<ScheduleForm>,
) -> AppResult<Json<ScheduleEntry>> {
    let service = ScheduleService::new(state.schedules.clone());
    let today = Utc::now().date_naive();
    let entry = service.update(schedule_id, form, today).await?;
    Ok(Json(entry))
}

/// Delete a schedule entry; requires `?confirm=true`
pub async fn delete_schedule(
    State(state): State<AppState>,
    ApiPath(schedule_id): ApiPath<u32>,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> impl IntoResponse {
    let service = ScheduleService::new(state.schedules.clone());

    match service.delete(schedule_id, query.confirm).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
