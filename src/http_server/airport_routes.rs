//! Airport HTTP Routes

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::executor::{AirlinesForAirport, QueryExecutor};
use crate::mutation::MutationEngine;
use crate::schema::{Airport, AirportPatch, NewAirport};
use crate::storage::SharedStore;

use super::errors::ApiResult;
use super::response::MutationResponse;

// ==================
// Airport Routes
// ==================

/// Create airport routes
pub fn airport_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/airport", post(insert_airport_handler))
        .route(
            "/airport/:key",
            get(get_airport_handler)
                .put(update_airport_handler)
                .delete(delete_airport_handler),
        )
        .route("/airlinesForAirport/:code", get(airlines_for_airport_handler))
        .with_state(store)
}

// ==================
// Query Handlers
// ==================

async fn get_airport_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<Airport>> {
    let store = store.read()?;
    let airport = QueryExecutor::new(&store).airport_by_code(&code)?;
    Ok(Json(airport.clone()))
}

async fn airlines_for_airport_handler(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> ApiResult<Json<AirlinesForAirport>> {
    let store = store.read()?;
    let report = QueryExecutor::new(&store).airlines_for_airport(&code)?;
    Ok(Json(report))
}

// ==================
// Mutation Handlers
// ==================

async fn insert_airport_handler(
    State(store): State<SharedStore>,
    body: Result<Json<NewAirport>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MutationResponse>)> {
    let Json(request) = body?;
    let mut store = store.write()?;
    let id = MutationEngine::new(&mut store).insert_airport(request.into())?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::with_id("Airport inserted successfully", id)),
    ))
}

async fn update_airport_handler(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<AirportPatch>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let mut store = store.write()?;
    MutationEngine::new(&mut store).update_airport(id, &patch)?;

    Ok(Json(MutationResponse::with_id(
        "Airport modified successfully",
        id,
    )))
}

async fn delete_airport_handler(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Path(id) = id?;
    let mut store = store.write()?;
    let removed = MutationEngine::new(&mut store).delete_airport(id)?;

    Ok(Json(
        MutationResponse::with_id("Airport and associated routes removed", id)
            .routes_removed(removed),
    ))
}
