//! Report HTTP Routes
//!
//! Whole-table listings and per-airline / per-airport route counts.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::executor::{
    AirlineRoutesReport, AirlinesReport, AirportRoutesReport, AirportsReport, QueryExecutor,
};
use crate::storage::SharedStore;

use super::errors::ApiResult;

/// Create report routes
pub fn report_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/airlines", get(airlines_report_handler))
        .route("/airports", get(airports_report_handler))
        .route("/airlineRoutes/:code", get(airline_routes_handler))
        .route("/airportRoutes/:code", get(airport_routes_handler))
        .with_state(store)
}

async fn airlines_report_handler(
    State(store): State<SharedStore>,
) -> ApiResult<Json<AirlinesReport>> {
    let store = store.read()?;
    Ok(Json(QueryExecutor::new(&store).airlines_report()))
}

async fn airports_report_handler(
    State(store): State<SharedStore>,
) -> ApiResult<Json<AirportsReport>> {
    let store = store.read()?;
    Ok(Json(QueryExecutor::new(&store).airports_report()))
}

async fn airline_routes_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<AirlineRoutesReport>> {
    let store = store.read()?;
    let report = QueryExecutor::new(&store).airline_routes_report(&code)?;
    Ok(Json(report))
}

async fn airport_routes_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<AirportRoutesReport>> {
    let store = store.read()?;
    let report = QueryExecutor::new(&store).airport_routes_report(&code)?;
    Ok(Json(report))
}
