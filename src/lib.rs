//! flightdb - In-memory store for a global flight network
//!
//! Airlines, airports and routes loaded from flat files, indexed by IATA code,
//! mutated with referential checks and cascading deletes, and queried over a
//! JSON HTTP API.

pub mod cli;
pub mod executor;
pub mod geo;
pub mod http_server;
pub mod index;
pub mod loader;
pub mod mutation;
pub mod schema;
pub mod storage;
