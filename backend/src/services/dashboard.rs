//! Dashboard KPI cards

use std::sync::Arc;

use shared::models::DashboardCard;

use crate::repository::Catalog;

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<dyn Catalog>,
}

impl DashboardService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn cards(&self) -> Vec<DashboardCard> {
        self.catalog.dashboard_cards().to_vec()
    }
}
