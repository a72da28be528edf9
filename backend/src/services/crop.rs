//! Crop catalog service: search, category filter, and detail views

use std::sync::Arc;

use serde::Serialize;
use shared::models::Crop;
use shared::{category_options, search_crops, CategoryFilter, SearchResults};

use crate::error::{AppError, AppResult};
use crate::repository::Catalog;

/// Crop catalog service
#[derive(Clone)]
pub struct CropService {
    catalog: Arc<dyn Catalog>,
}

/// Crop card with its display labels
#[derive(Debug, Clone, Serialize)]
pub struct CropCard {
    #[serde(flatten)]
    pub crop: Crop,
    pub category_label: String,
    pub water_requirement_label: String,
    pub irrigation_note: &'static str,
}

impl From<Crop> for CropCard {
    fn from(crop: Crop) -> Self {
        Self {
            category_label: crop.category.to_string(),
            water_requirement_label: crop.water_requirement.to_string(),
            irrigation_note: crop.irrigation_note(),
            crop,
        }
    }
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Search crops by name within a category ("All" or absent for every category)
    pub fn search(&self, query: &str, category: Option<&str>) -> AppResult<SearchResults<CropCard>> {
        let filter = CategoryFilter::from_param(category).map_err(|message| AppError::Validation {
            field: "category".to_string(),
            message,
        })?;

        let results = search_crops(self.catalog.crops(), query, filter);
        tracing::debug!(query, ?filter, matches = results.items.len(), "Crop search");
        Ok(results.map(CropCard::from))
    }

    /// Category selector values
    pub fn categories(&self) -> Vec<String> {
        category_options()
    }

    /// Get a crop's detail view
    pub fn get_crop(&self, crop_id: u32) -> AppResult<CropCard> {
        self.catalog
            .crop(crop_id)
            .cloned()
            .map(CropCard::from)
            .ok_or_else(|| AppError::NotFound("Crop".to_string()))
    }
}
