//! Water usage chart service

use std::sync::Arc;

use shared::models::UsageChart;
use shared::{ChartType, UsageGranularity};

use crate::error::{AppError, AppResult};
use crate::repository::Catalog;

#[derive(Clone)]
pub struct UsageService {
    catalog: Arc<dyn Catalog>,
}

impl UsageService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Render the stored series for a granularity tab
    pub fn chart(&self, granularity: UsageGranularity, chart_type: ChartType) -> AppResult<UsageChart> {
        self.catalog
            .usage_series(granularity)
            .map(|series| series.render(chart_type))
            .ok_or_else(|| AppError::NotFound(format!("{} usage series", granularity)))
    }
}
