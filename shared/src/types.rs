//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Selection of the farm filter used by the scheduler
///
/// Serialized as `"all"` or `{"farm": "<name>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FarmFilter {
    #[default]
    All,
    Farm(String),
}

impl FarmFilter {
    /// Build a filter from a query parameter; missing, blank, or `all` selects every farm
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => FarmFilter::All,
            Some(value) if value.eq_ignore_ascii_case("all") => FarmFilter::All,
            Some(value) => FarmFilter::Farm(value.to_string()),
        }
    }

    /// Whether a farm name passes this filter
    pub fn matches(&self, farm_name: &str) -> bool {
        match self {
            FarmFilter::All => true,
            FarmFilter::Farm(name) => name == farm_name,
        }
    }
}

/// Time-bucketing of a displayed usage series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UsageGranularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl UsageGranularity {
    pub const ALL: [UsageGranularity; 3] = [
        UsageGranularity::Daily,
        UsageGranularity::Weekly,
        UsageGranularity::Monthly,
    ];
}

impl std::fmt::Display for UsageGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageGranularity::Daily => write!(f, "Daily"),
            UsageGranularity::Weekly => write!(f, "Weekly"),
            UsageGranularity::Monthly => write!(f, "Monthly"),
        }
    }
}

impl std::str::FromStr for UsageGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(UsageGranularity::Daily),
            "weekly" => Ok(UsageGranularity::Weekly),
            "monthly" => Ok(UsageGranularity::Monthly),
            other => Err(format!("Unknown granularity: {}", other)),
        }
    }
}

/// Visual encoding of the usage chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Area,
    Bar,
}

impl ChartType {
    /// The other encoding
    pub fn toggled(self) -> Self {
        match self {
            ChartType::Area => ChartType::Bar,
            ChartType::Bar => ChartType::Area,
        }
    }
}

impl std::str::FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "area" => Ok(ChartType::Area),
            "bar" => Ok(ChartType::Bar),
            other => Err(format!("Unknown chart type: {}", other)),
        }
    }
}

/// Time-bucketing of the weather forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ForecastGranularity {
    #[default]
    Daily,
    Hourly,
}

impl std::str::FromStr for ForecastGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ForecastGranularity::Daily),
            "hourly" => Ok(ForecastGranularity::Hourly),
            other => Err(format!("Unknown forecast view: {}", other)),
        }
    }
}
