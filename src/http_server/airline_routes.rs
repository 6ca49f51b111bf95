//! Airline HTTP Routes
//!
//! Lookup by IATA code plus insert, update and cascading delete.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::executor::{QueryExecutor, TopCities};
use crate::mutation::MutationEngine;
use crate::schema::{Airline, AirlinePatch, NewAirline};
use crate::storage::SharedStore;

use super::errors::ApiResult;
use super::response::MutationResponse;

// ==================
// Airline Routes
// ==================

/// Create airline routes.
///
/// `/airline/:key` takes an IATA code for GET and a numeric id for PUT and
/// DELETE.
pub fn airline_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/airline", post(insert_airline_handler))
        .route(
            "/airline/:key",
            get(get_airline_handler)
                .put(update_airline_handler)
                .delete(delete_airline_handler),
        )
        .route("/topCitiesForAirline/:code", get(top_cities_handler))
        .with_state(store)
}

// ==================
// Query Handlers
// ==================

async fn get_airline_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<Airline>> {
    let store = store.read()?;
    let airline = QueryExecutor::new(&store).airline_by_code(&code)?;
    Ok(Json(airline.clone()))
}

async fn top_cities_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<TopCities>> {
    let store = store.read()?;
    let report = QueryExecutor::new(&store).top_cities_for_airline(&code)?;
    Ok(Json(report))
}

// ==================
// Mutation Handlers
// ==================

async fn insert_airline_handler(
    State(store): State<SharedStore>,
    body: Result<Json<NewAirline>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MutationResponse>)> {
    let Json(request) = body?;
    let mut store = store.write()?;
    let id = MutationEngine::new(&mut store).insert_airline(request.into())?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::with_id("Airline inserted successfully", id)),
    ))
}

async fn update_airline_handler(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<AirlinePatch>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let mut store = store.write()?;
    MutationEngine::new(&mut store).update_airline(id, &patch)?;

    Ok(Json(MutationResponse::with_id(
        "Airline modified successfully",
        id,
    )))
}

async fn delete_airline_handler(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Path(id) = id?;
    let mut store = store.write()?;
    let removed = MutationEngine::new(&mut store).delete_airline(id)?;

    Ok(Json(
        MutationResponse::with_id("Airline and associated routes removed", id)
            .routes_removed(removed),
    ))
}
