//! Dashboard summary cards

use serde::{Deserialize, Serialize};

/// A static KPI card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub description: String,
    pub footer: Option<String>,
    pub accent: CardAccent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardAccent {
    Blue,
    Green,
    Brown,
    Leaf,
}
