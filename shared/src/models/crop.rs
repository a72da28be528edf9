//! Crop reference models

use serde::{Deserialize, Serialize};

/// A crop's water and growing requirements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: u32,
    pub name: String,
    pub scientific_name: String,
    pub category: CropCategory,
    pub water_requirement: WaterRequirement,
    pub growing_season: String,
    pub soil_type: String,
    pub days_to_maturity: String,
    pub watering_frequency: String,
    pub watering_amount: String,
    pub description: String,
    pub best_practices: Vec<String>,
    pub image_url: Option<String>,
}

impl Crop {
    /// Short irrigation note shown on the crop card
    pub fn irrigation_note(&self) -> &'static str {
        if self.water_requirement.is_high() {
            "Requires frequent irrigation"
        } else {
            "Moderate water needs"
        }
    }
}

/// Crop categories in selector order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CropCategory {
    Cereal,
    Legume,
    Forage,
    Fiber,
    Sugar,
    Vegetable,
}

impl CropCategory {
    pub const ALL: [CropCategory; 6] = [
        CropCategory::Cereal,
        CropCategory::Legume,
        CropCategory::Forage,
        CropCategory::Fiber,
        CropCategory::Sugar,
        CropCategory::Vegetable,
    ];
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCategory::Cereal => write!(f, "Cereal"),
            CropCategory::Legume => write!(f, "Legume"),
            CropCategory::Forage => write!(f, "Forage"),
            CropCategory::Fiber => write!(f, "Fiber"),
            CropCategory::Sugar => write!(f, "Sugar"),
            CropCategory::Vegetable => write!(f, "Vegetable"),
        }
    }
}

impl std::str::FromStr for CropCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| format!("Unknown crop category: {}", s))
    }
}

/// Water requirement tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterRequirement {
    Moderate,
    ModerateToHigh,
    High,
    VeryHigh,
}

impl WaterRequirement {
    pub fn is_high(&self) -> bool {
        matches!(self, WaterRequirement::High | WaterRequirement::VeryHigh)
    }
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterRequirement::Moderate => write!(f, "Moderate"),
            WaterRequirement::ModerateToHigh => write!(f, "Moderate to High"),
            WaterRequirement::High => write!(f, "High"),
            WaterRequirement::VeryHigh => write!(f, "Very High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!("Legume".parse::<CropCategory>().unwrap(), CropCategory::Legume);
        assert!("legume".parse::<CropCategory>().is_err());
        assert!("All".parse::<CropCategory>().is_err());
    }

    #[test]
    fn test_high_tiers() {
        assert!(WaterRequirement::High.is_high());
        assert!(WaterRequirement::VeryHigh.is_high());
        assert!(!WaterRequirement::ModerateToHigh.is_high());
        assert!(!WaterRequirement::Moderate.is_high());
    }
}
