//! Farm models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Soil moisture below this percentage is reported as low
pub const LOW_MOISTURE_THRESHOLD: i32 = 50;

/// A managed field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: u32,
    pub name: String,
    pub area_acres: Decimal,
    pub crops: Vec<String>,
    pub location: String,
    pub moisture_percent: i32,
    /// Free-form label such as "2 days ago"
    pub last_irrigation: String,
    pub status: FarmStatus,
    pub image_url: Option<String>,
    pub soil_type: String,
    pub irrigation_method: IrrigationMethod,
    pub coordinates: GpsCoordinates,
}

impl Farm {
    /// Moisture label shown next to the reading
    ///
    /// Derived from the reading alone; it is not reconciled with `status`.
    pub fn moisture_level(&self) -> MoistureLevel {
        MoistureLevel::from_percent(self.moisture_percent)
    }

    /// Whether any designated text field contains the lowercase needle
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.crops.iter().any(|c| c.to_lowercase().contains(needle))
    }
}

/// Stored irrigation status of a farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FarmStatus {
    Optimal,
    Low,
}

impl FarmStatus {
    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            FarmStatus::Optimal => "Optimal",
            FarmStatus::Low => "Needs Water",
        }
    }
}

/// Soil moisture reading classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoistureLevel {
    Low,
    Good,
}

impl MoistureLevel {
    pub fn from_percent(percent: i32) -> Self {
        if percent < LOW_MOISTURE_THRESHOLD {
            MoistureLevel::Low
        } else {
            MoistureLevel::Good
        }
    }
}

impl std::fmt::Display for MoistureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoistureLevel::Low => write!(f, "Low"),
            MoistureLevel::Good => write!(f, "Good"),
        }
    }
}

/// Irrigation methods offered by the planner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Furrow,
    CenterPivot,
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationMethod::Drip => write!(f, "Drip Irrigation"),
            IrrigationMethod::Sprinkler => write!(f, "Sprinkler System"),
            IrrigationMethod::Furrow => write!(f, "Furrow Irrigation"),
            IrrigationMethod::CenterPivot => write!(f, "Center Pivot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moisture_level_threshold() {
        assert_eq!(MoistureLevel::from_percent(42), MoistureLevel::Low);
        assert_eq!(MoistureLevel::from_percent(49), MoistureLevel::Low);
        assert_eq!(MoistureLevel::from_percent(50), MoistureLevel::Good);
        assert_eq!(MoistureLevel::from_percent(60), MoistureLevel::Good);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FarmStatus::Optimal.label(), "Optimal");
        assert_eq!(FarmStatus::Low.label(), "Needs Water");
        assert_eq!(IrrigationMethod::CenterPivot.to_string(), "Center Pivot");
    }
}
