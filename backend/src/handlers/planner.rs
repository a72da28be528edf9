//! Planner page handler

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;

use crate::extract::ApiQuery;
use crate::services::planner::{PlannerService, PlannerView};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlannerQuery {
    /// Farm handed off from a farm detail
    pub farm: Option<String>,
}

pub async fn get_planner(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PlannerQuery>,
) -> Json<PlannerView> {
    let service = PlannerService::new(state.catalog.clone(), state.schedules.clone());
    Json(service.view(query.farm.as_deref()).await)
}
