//! AI schedule generator handler

use axum::{extract::State, Json};
use shared::GenerateScheduleForm;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::services::generator::GeneratedSchedule;
use crate::AppState;

/// Generate an irrigation schedule from the six planner inputs
pub async fn generate_schedule(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<GenerateScheduleForm>,
) -> AppResult<Json<GeneratedSchedule>> {
    let schedule = state.generator.generate(&form).await?;
    Ok(Json(schedule))
}
