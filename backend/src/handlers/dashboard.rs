//! Dashboard handlers

use axum::{extract::State, Json};
use shared::models::DashboardCard;

use crate::services::DashboardService;
use crate::AppState;

/// KPI cards shown on the dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> Json<Vec<DashboardCard>> {
    let service = DashboardService::new(state.catalog.clone());
    Json(service.cards())
}
