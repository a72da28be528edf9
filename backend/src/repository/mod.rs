//! Read-only data access for the sample catalog
//!
//! Handlers and services only see the [`Catalog`] trait, so the literal seed
//! can be swapped for a real store without touching them.

use std::collections::HashMap;

use shared::models::{Crop, DashboardCard, Farm, ScheduleEntry, UsageSeries, WeatherSnapshot};
use shared::seed;
use shared::UsageGranularity;

/// Source of farms, crops, weather, usage series, and dashboard cards
pub trait Catalog: Send + Sync {
    fn farms(&self) -> &[Farm];

    fn crops(&self) -> &[Crop];

    fn weather(&self) -> &WeatherSnapshot;

    fn usage_series(&self, granularity: UsageGranularity) -> Option<&UsageSeries>;

    fn dashboard_cards(&self) -> &[DashboardCard];

    /// Schedule entries the schedule store starts with
    fn initial_schedules(&self) -> Vec<ScheduleEntry>;

    fn farm(&self, id: u32) -> Option<&Farm> {
        self.farms().iter().find(|f| f.id == id)
    }

    fn crop(&self, id: u32) -> Option<&Crop> {
        self.crops().iter().find(|c| c.id == id)
    }

    /// Farm names in catalog order, used as scheduler options
    fn farm_names(&self) -> Vec<String> {
        self.farms().iter().map(|f| f.name.clone()).collect()
    }
}

/// Catalog backed by the literal sample data
pub struct SeedCatalog {
    farms: Vec<Farm>,
    crops: Vec<Crop>,
    weather: WeatherSnapshot,
    usage: HashMap<UsageGranularity, UsageSeries>,
    dashboard_cards: Vec<DashboardCard>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        let usage = UsageGranularity::ALL
            .into_iter()
            .map(|g| (g, seed::usage_series(g)))
            .collect();

        Self {
            farms: seed::farms(),
            crops: seed::crops(),
            weather: seed::weather(),
            usage,
            dashboard_cards: seed::dashboard_cards(),
        }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for SeedCatalog {
    fn farms(&self) -> &[Farm] {
        &self.farms
    }

    fn crops(&self) -> &[Crop] {
        &self.crops
    }

    fn weather(&self) -> &WeatherSnapshot {
        &self.weather
    }

    fn usage_series(&self, granularity: UsageGranularity) -> Option<&UsageSeries> {
        self.usage.get(&granularity)
    }

    fn dashboard_cards(&self) -> &[DashboardCard] {
        &self.dashboard_cards
    }

    fn initial_schedules(&self) -> Vec<ScheduleEntry> {
        seed::schedules()
    }
}
