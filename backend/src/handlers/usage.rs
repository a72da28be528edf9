//! Water usage chart handler

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use shared::models::UsageChart;
use shared::{ChartType, UsageGranularity};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::handlers::parse_param;
use crate::services::UsageService;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UsageQuery {
    pub granularity: Option<String>,
    pub chart: Option<String>,
}

/// Usage chart for a granularity tab and chart type
pub async fn get_usage(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UsageQuery>,
) -> AppResult<Json<UsageChart>> {
    let granularity: UsageGranularity = parse_param("granularity", query.granularity.as_deref())?;
    let chart_type: ChartType = parse_param("chart", query.chart.as_deref())?;

    let service = UsageService::new(state.catalog.clone());
    let chart = service.chart(granularity, chart_type)?;
    Ok(Json(chart))
}
