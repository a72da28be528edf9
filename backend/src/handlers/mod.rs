//! HTTP handlers for the AquaFarm API

pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod generator;
pub mod health;
pub mod navigation;
pub mod planner;
pub mod schedule;
pub mod usage;
pub mod weather;

use std::str::FromStr;

use crate::error::{AppError, AppResult};

pub use crop::*;
pub use dashboard::*;
pub use farm::*;
pub use generator::*;
pub use health::*;
pub use navigation::*;
pub use planner::*;
pub use schedule::*;
pub use usage::*;
pub use weather::*;

/// Parse an optional query parameter, falling back to the type's default
pub(crate) fn parse_param<T>(field: &str, value: Option<&str>) -> AppResult<T>
where
    T: FromStr<Err = String> + Default,
{
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw.parse().map_err(|message| AppError::Validation {
            field: field.to_string(),
            message,
        }),
    }
}
