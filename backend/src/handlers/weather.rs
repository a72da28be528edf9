//! HTTP handlers for the weather panel

use axum::{
    extract::State,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{WeatherLocation, WeatherPanel, WeatherView};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::handlers::parse_param;
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters of the weather panel
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    /// `daily` or `hourly`
    pub view: Option<String>,
    #[serde(default)]
    pub expanded: bool,
}

/// Selectable weather locations
pub async fn list_weather_locations(State(state): State<AppState>) -> Json<Vec<WeatherLocation>> {
    let service = WeatherService::new(state.catalog.clone());
    Json(service.locations().to_vec())
}

/// Render the weather panel
pub async fn get_weather(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<WeatherQuery>,
) -> AppResult<Json<WeatherPanel>> {
    let view = WeatherView {
        granularity: parse_param("view", query.view.as_deref())?,
        expanded: query.expanded,
    };

    let service = WeatherService::new(state.catalog.clone());
    let panel = service.render(query.location.as_deref(), view, Utc::now().date_naive())?;
    Ok(Json(panel))
}
