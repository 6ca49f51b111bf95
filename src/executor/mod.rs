//! Query executor subsystem for flightdb
//!
//! Lookups, aggregate reports and one-hop graph queries over the store.
//!
//! # Invariants
//!
//! - Read-only: every operation borrows the store immutably
//! - Deterministic: every result ordering ends in a unique tie-break
//! - Dangling route references are skipped, never reported as errors

mod executor;
mod result;
mod sorter;

pub use executor::{QueryExecutor, TOP_CITY_LIMIT};
pub use result::{
    AirlineRouteCount, AirlineRoutesReport, AirlineRow, AirlineSummary, AirlinesForAirport,
    AirlinesReport, AirportRouteCount, AirportRoutesReport, AirportRow, AirportSummary,
    AirportsReport, CityCount, Connection, Distance, OneHopReport, TopCities,
};
pub use sorter::{HubLegs, ResultSorter};
