//! Observability HTTP Routes
//!
//! Health check and table counts.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::storage::{SharedStore, StoreStats};

use super::errors::ApiResult;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create observability routes
pub fn observability_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .with_state(store)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Row counts for the three tables
async fn stats_handler(State(store): State<SharedStore>) -> ApiResult<Json<StoreStats>> {
    let store = store.read()?;
    Ok(Json(store.stats()))
}
