//! Navigation shell handler

use axum::Json;
use shared::models::{nav_links, NavLink};

/// Menu links in display order
pub async fn get_navigation() -> Json<Vec<NavLink>> {
    Json(nav_links())
}
