//! Business logic services for the AquaFarm irrigation planner

pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod generator;
pub mod planner;
pub mod schedule;
pub mod usage;
pub mod weather;

pub use crop::CropService;
pub use dashboard::DashboardService;
pub use farm::FarmService;
pub use generator::ScheduleGenerator;
pub use planner::PlannerService;
pub use schedule::{ScheduleService, ScheduleStore, SharedScheduleStore};
pub use usage::UsageService;
pub use weather::WeatherService;
