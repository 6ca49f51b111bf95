//! Route Network HTTP Routes
//!
//! Route insert/delete and the distance and one-hop queries.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::executor::{Distance, OneHopReport, QueryExecutor};
use crate::mutation::MutationEngine;
use crate::schema::{NewRoute, RouteKey};
use crate::storage::SharedStore;

use super::errors::ApiResult;
use super::response::MutationResponse;

// ==================
// Network Routes
// ==================

/// Create route network routes
pub fn network_routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/route",
            post(insert_route_handler).delete(delete_route_handler),
        )
        .route("/distance/:src/:dst", get(distance_handler))
        .route("/onehop/:src/:dst", get(one_hop_handler))
        .with_state(store)
}

// ==================
// Query Handlers
// ==================

async fn distance_handler(
    State(store): State<SharedStore>,
    Path((src, dst)): Path<(String, String)>,
) -> ApiResult<Json<Distance>> {
    let store = store.read()?;
    let distance = QueryExecutor::new(&store).distance(&src, &dst)?;
    Ok(Json(distance))
}

async fn one_hop_handler(
    State(store): State<SharedStore>,
    Path((src, dst)): Path<(String, String)>,
) -> ApiResult<Json<OneHopReport>> {
    let store = store.read()?;
    let report = QueryExecutor::new(&store).one_hop(&src, &dst)?;
    Ok(Json(report))
}

// ==================
// Mutation Handlers
// ==================

async fn insert_route_handler(
    State(store): State<SharedStore>,
    body: Result<Json<NewRoute>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MutationResponse>)> {
    let Json(request) = body?;
    let mut store = store.write()?;
    MutationEngine::new(&mut store).insert_route(request.into())?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Route inserted successfully")),
    ))
}

async fn delete_route_handler(
    State(store): State<SharedStore>,
    body: Result<Json<RouteKey>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Json(key) = body?;
    let mut store = store.write()?;
    let removed = MutationEngine::new(&mut store).delete_routes(key)?;

    Ok(Json(MutationResponse::new("Route removed").routes_removed(removed)))
}
