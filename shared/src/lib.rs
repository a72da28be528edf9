//! Shared types and models for the AquaFarm irrigation planner
//!
//! This crate contains the domain records, the literal sample data, and the
//! pure search/filter/render logic used by both the backend and the browser
//! module (via WASM).

pub mod filter;
pub mod models;
pub mod seed;
pub mod types;
pub mod validation;

pub use filter::*;
pub use models::*;
pub use types::*;
pub use validation::*;
