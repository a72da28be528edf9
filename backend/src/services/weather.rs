//! Weather panel service over the catalog snapshot

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{WeatherLocation, WeatherPanel, WeatherView};

use crate::error::{AppError, AppResult};
use crate::repository::Catalog;

#[derive(Clone)]
pub struct WeatherService {
    catalog: Arc<dyn Catalog>,
}

impl WeatherService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn locations(&self) -> &[WeatherLocation] {
        &self.catalog.weather().locations
    }

    /// Render the panel for a location (first location when absent)
    pub fn render(&self, location: Option<&str>, view: WeatherView, today: NaiveDate) -> AppResult<WeatherPanel> {
        let snapshot = self.catalog.weather();
        let name = match location {
            Some(name) => name,
            None => snapshot
                .locations
                .first()
                .map(|l| l.name.as_str())
                .ok_or_else(|| AppError::NotFound("Weather location".to_string()))?,
        };

        snapshot
            .render(name, view, today)
            .ok_or_else(|| AppError::NotFound(format!("Weather location '{}'", name)))
    }
}
