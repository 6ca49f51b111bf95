//! The flight network store: airline, airport and route tables

use serde::Serialize;

use crate::schema::{Airline, Airport, Route};

use super::table::Table;

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub airlines: usize,
    pub airports: usize,
    pub routes: usize,
}

/// All tables and their indexes.
///
/// Reads go through `QueryExecutor`, writes through `MutationEngine`.
#[derive(Debug, Clone, Default)]
pub struct FlightStore {
    airlines: Table<Airline>,
    airports: Table<Airport>,
    routes: Vec<Route>,
}

impl FlightStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from bulk-loaded records.
    ///
    /// Routes are taken as given; no reference checks are made here.
    pub fn from_records(
        airlines: impl IntoIterator<Item = Airline>,
        airports: impl IntoIterator<Item = Airport>,
        routes: Vec<Route>,
    ) -> Self {
        Self {
            airlines: Table::from_rows(airlines),
            airports: Table::from_rows(airports),
            routes,
        }
    }

    pub fn airlines(&self) -> &Table<Airline> {
        &self.airlines
    }

    pub fn airports(&self) -> &Table<Airport> {
        &self.airports
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn airlines_mut(&mut self) -> &mut Table<Airline> {
        &mut self.airlines
    }

    pub(crate) fn airports_mut(&mut self) -> &mut Table<Airport> {
        &mut self.airports
    }

    pub(crate) fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            airlines: self.airlines.len(),
            airports: self.airports.len(),
            routes: self.routes.len(),
        }
    }
}
