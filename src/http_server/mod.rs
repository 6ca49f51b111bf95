//! # flightdb HTTP Server Module
//!
//! JSON API over the shared flight network store. Every handler takes the
//! store lock, answers synchronously, and releases it before returning.
//!
//! # Endpoints
//!
//! - `/health`, `/stats` - Health check and table counts
//! - `/airline/*`, `/airport/*` - Lookup by IATA code, insert, update, delete
//! - `/airlinesForAirport/:code`, `/topCitiesForAirline/:code` - Per-entity queries
//! - `/route`, `/distance/:src/:dst`, `/onehop/:src/:dst` - Route network
//! - `/reports/*` - Listings and route-count reports

pub mod config;
pub mod errors;
pub mod response;
pub mod server;

mod airline_routes;
mod airport_routes;
mod network_routes;
mod observability_routes;
mod report_routes;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use observability_routes::HealthResponse;
pub use response::MutationResponse;
pub use server::HttpServer;
