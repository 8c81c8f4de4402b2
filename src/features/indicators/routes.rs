use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::indicators::handlers;
use crate::features::indicators::services::IndicatorService;

/// Create routes for the indicators feature (read-only)
pub fn routes(service: Arc<IndicatorService>) -> Router {
    Router::new()
        .route("/api/indicators", get(handlers::list_indicators))
        .route("/api/indicators/{id}", get(handlers::get_indicator))
        .with_state(service)
}
