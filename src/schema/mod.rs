//! Entity definitions for flightdb
//!
//! Three record kinds make up the flight network:
//!
//! - `Airline`: keyed by integer id, indexed by IATA code
//! - `Airport`: keyed by integer id, indexed by IATA code, carries coordinates
//! - `Route`: directed airline edge between two airports, not independently keyed
//!
//! Insert payloads (`NewAirline`, `NewAirport`, `NewRoute`) and partial update
//! payloads (`AirlinePatch`, `AirportPatch`) live next to the records they build.

mod patch;
mod types;

pub use patch::{AirlinePatch, AirportPatch, Patch};
pub use types::{
    Airline, AirlineId, Airport, AirportId, EntityKind, NewAirline, NewAirport, NewRoute, Record, Route,
    RouteKey,
};
