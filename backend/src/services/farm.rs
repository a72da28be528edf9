//! Farm registry service: search and detail views over the catalog

use std::sync::Arc;

use serde::Serialize;
use shared::models::{Farm, MoistureLevel, PlannerHandoff};
use shared::{search_farms, SearchResults};

use crate::error::{AppError, AppResult};
use crate::repository::Catalog;

/// Farm registry service
#[derive(Clone)]
pub struct FarmService {
    catalog: Arc<dyn Catalog>,
}

/// Farm card in the list view
#[derive(Debug, Clone, Serialize)]
pub struct FarmCard {
    #[serde(flatten)]
    pub farm: Farm,
    pub status_label: &'static str,
    pub moisture_level: MoistureLevel,
}

/// Farm detail view with the link into the planner
#[derive(Debug, Clone, Serialize)]
pub struct FarmDetail {
    #[serde(flatten)]
    pub card: FarmCard,
    pub irrigation_method_label: String,
    pub schedule_link: PlannerHandoff,
}

impl From<Farm> for FarmCard {
    fn from(farm: Farm) -> Self {
        Self {
            status_label: farm.status.label(),
            moisture_level: farm.moisture_level(),
            farm,
        }
    }
}

impl FarmService {
    /// Create a new FarmService instance
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Search farms by name, location, or crop
    pub fn search(&self, query: &str) -> SearchResults<FarmCard> {
        let results = search_farms(self.catalog.farms(), query);
        tracing::debug!(query, matches = results.items.len(), "Farm search");
        results.map(FarmCard::from)
    }

    /// Get a farm's detail view
    pub fn get_farm(&self, farm_id: u32) -> AppResult<FarmDetail> {
        let farm = self
            .catalog
            .farm(farm_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;

        Ok(FarmDetail {
            irrigation_method_label: farm.irrigation_method.to_string(),
            schedule_link: PlannerHandoff::for_farm(farm.name.clone()),
            card: FarmCard::from(farm),
        })
    }
}
