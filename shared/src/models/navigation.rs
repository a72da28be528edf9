//! Navigation shell routes and the farm-to-planner handoff

use serde::{Deserialize, Serialize};

/// Top-level client routes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Farms,
    Crops,
    Planner,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Dashboard, Route::Farms, Route::Crops, Route::Planner];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Farms => "/farms",
            Route::Crops => "/crops",
            Route::Planner => "/planner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Farms => "Farms",
            Route::Crops => "Crops",
            Route::Planner => "Planner",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: String,
    pub path: String,
}

impl From<Route> for NavLink {
    fn from(route: Route) -> Self {
        Self {
            route,
            label: route.label().to_string(),
            path: route.path().to_string(),
        }
    }
}

/// Navigation links in menu order
pub fn nav_links() -> Vec<NavLink> {
    Route::ALL.into_iter().map(NavLink::from).collect()
}

/// Link from a farm to the planner with the farm preselected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerHandoff {
    pub route: Route,
    pub farm: String,
}

impl PlannerHandoff {
    pub fn for_farm(farm: impl Into<String>) -> Self {
        Self {
            route: Route::Planner,
            farm: farm.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_order() {
        let links = nav_links();
        let paths: Vec<&str> = links.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/farms", "/crops", "/planner"]);
    }

    #[test]
    fn test_handoff_targets_planner() {
        let handoff = PlannerHandoff::for_farm("North Valley");
        assert_eq!(handoff.route, Route::Planner);
        assert_eq!(handoff.farm, "North Valley");
    }
}
