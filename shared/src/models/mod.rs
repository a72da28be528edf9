//! Domain models for the AquaFarm irrigation planner

mod crop;
mod dashboard;
mod farm;
mod navigation;
mod schedule;
mod usage;
mod weather;

pub use crop::*;
pub use dashboard::*;
pub use farm::*;
pub use navigation::*;
pub use schedule::*;
pub use usage::*;
pub use weather::*;
