//! Water usage series and the chart renderer

use serde::{Deserialize, Serialize};

use crate::types::{ChartType, UsageGranularity};

pub const USAGE_UNIT: &str = "gal";

/// One period of a usage series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsagePoint {
    pub period: String,
    pub actual_gallons: u32,
    pub recommended_gallons: u32,
}

/// Ordered usage points for one granularity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageSeries {
    pub granularity: UsageGranularity,
    pub points: Vec<UsagePoint>,
}

/// Chart ready for the front end: labels plus one track per measure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageChart {
    pub chart_type: ChartType,
    pub granularity: UsageGranularity,
    pub unit: String,
    pub labels: Vec<String>,
    pub tracks: Vec<ChartTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartTrack {
    pub key: String,
    pub name: String,
    pub color: String,
    pub values: Vec<u32>,
}

impl UsageSeries {
    /// Render the series with the given encoding
    pub fn render(&self, chart_type: ChartType) -> UsageChart {
        let labels = self.points.iter().map(|p| p.period.clone()).collect();

        let tracks = vec![
            ChartTrack {
                key: "actual".to_string(),
                name: "Actual Usage".to_string(),
                color: "#2196F3".to_string(),
                values: self.points.iter().map(|p| p.actual_gallons).collect(),
            },
            ChartTrack {
                key: "recommended".to_string(),
                name: "Recommended Usage".to_string(),
                color: "#4CAF50".to_string(),
                values: self.points.iter().map(|p| p.recommended_gallons).collect(),
            },
        ];

        UsageChart {
            chart_type,
            granularity: self.granularity,
            unit: USAGE_UNIT.to_string(),
            labels,
            tracks,
        }
    }
}
