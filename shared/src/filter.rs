//! Client-side search and filtering over in-memory records
//!
//! All functions are pure and synchronous; an empty query matches every record.

use serde::{Deserialize, Serialize};

use crate::models::{Crop, CropCategory, Farm};

/// Label of the catch-all category option
pub const ALL_CATEGORIES: &str = "All";

/// Crop category selector state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CropCategory),
}

impl CategoryFilter {
    /// Parse a selector value; `All` or nothing selects every category
    pub fn from_param(param: Option<&str>) -> Result<Self, String> {
        match param {
            None | Some("") | Some(ALL_CATEGORIES) => Ok(CategoryFilter::All),
            Some(name) => name.parse().map(CategoryFilter::Category),
        }
    }

    pub fn matches(&self, category: CropCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => *selected == category,
        }
    }
}

/// Selector values in display order, starting with "All"
pub fn category_options() -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(CropCategory::ALL.iter().map(|c| c.to_string()))
        .collect()
}

/// A filtered list plus the explicit empty-state message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults<T> {
    pub query: String,
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl<T> SearchResults<T> {
    fn new(query: &str, items: Vec<T>, noun: &str) -> Self {
        let empty_message = items
            .is_empty()
            .then(|| format!("No {} found matching \"{}\"", noun, query));
        Self {
            query: query.to_string(),
            items,
            empty_message,
        }
    }

    /// Convert each item, keeping the query and empty-state message
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResults<U> {
        SearchResults {
            query: self.query,
            items: self.items.into_iter().map(f).collect(),
            empty_message: self.empty_message,
        }
    }
}

/// Farms whose name, location, or any crop contains the query (case-insensitive)
pub fn filter_farms(farms: &[Farm], query: &str) -> Vec<Farm> {
    let needle = query.to_lowercase();
    farms
        .iter()
        .filter(|farm| farm.contains_text(&needle))
        .cloned()
        .collect()
}

/// Crops whose name contains the query and whose category passes the filter
pub fn filter_crops(crops: &[Crop], query: &str, category: CategoryFilter) -> Vec<Crop> {
    let needle = query.to_lowercase();
    crops
        .iter()
        .filter(|crop| crop.name.to_lowercase().contains(&needle) && category.matches(crop.category))
        .cloned()
        .collect()
}

pub fn search_farms(farms: &[Farm], query: &str) -> SearchResults<Farm> {
    SearchResults::new(query, filter_farms(farms, query), "farms")
}

pub fn search_crops(crops: &[Crop], query: &str, category: CategoryFilter) -> SearchResults<Crop> {
    SearchResults::new(query, filter_crops(crops, query, category), "crops")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_valley_finds_north_valley_only() {
        let found = filter_farms(&seed::farms(), "valley");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "North Valley");
    }

    #[test]
    fn test_farm_search_covers_location_and_crops() {
        let farms = seed::farms();
        let by_location = filter_farms(&farms, "midwest");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].name, "Main Field");

        let by_crop = filter_farms(&farms, "ALFALFA");
        assert!(by_crop.iter().all(|f| f.crops.iter().any(|c| c == "Alfalfa")));
        assert!(!by_crop.is_empty());
    }

    #[test]
    fn test_legume_finds_soybean_only() {
        let found = filter_crops(&seed::crops(), "", CategoryFilter::Category(CropCategory::Legume));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Soybean");
    }

    #[test]
    fn test_query_and_category_combine() {
        let crops = seed::crops();
        let found = filter_crops(&crops, "o", CategoryFilter::Category(CropCategory::Vegetable));
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tomato", "Potato"]);
    }

    #[test]
    fn test_empty_results_carry_message() {
        let results = search_crops(&seed::crops(), "banana", CategoryFilter::All);
        assert!(results.items.is_empty());
        assert_eq!(
            results.empty_message.as_deref(),
            Some("No crops found matching \"banana\"")
        );

        let results = search_farms(&seed::farms(), "");
        assert_eq!(results.items.len(), seed::farms().len());
        assert!(results.empty_message.is_none());
    }

    #[test]
    fn test_category_param() {
        assert_eq!(CategoryFilter::from_param(None).unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("All")).unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("Fiber")).unwrap(),
            CategoryFilter::Category(CropCategory::Fiber)
        );
        assert!(CategoryFilter::from_param(Some("Fruit")).is_err());
        assert_eq!(category_options()[0], "All");
        assert_eq!(category_options().len(), 7);
    }
}
