//! Result types for query execution
//!
//! Field names are part of the HTTP response contract.

use serde::Serialize;

use crate::schema::{Airline, AirlineId, Airport, AirportId};

/// Airline as listed under an airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineSummary {
    pub id: AirlineId,
    pub name: String,
    pub iata: String,
    pub country: String,
}

impl From<&Airline> for AirlineSummary {
    fn from(a: &Airline) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            iata: a.iata.clone(),
            country: a.country.clone(),
        }
    }
}

/// Airport header of a per-airport report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportSummary {
    pub id: AirportId,
    pub name: String,
    pub iata: String,
    pub city: String,
    pub country: String,
}

impl From<&Airport> for AirportSummary {
    fn from(a: &Airport) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            iata: a.iata.clone(),
            city: a.city.clone(),
            country: a.country.clone(),
        }
    }
}

/// Airlines with at least one route into an airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlinesForAirport {
    pub airport: String,
    pub airlines: Vec<AirlineSummary>,
    pub count: usize,
}

/// Destination city with its route count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub routes: usize,
}

/// Most served destination cities of an airline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCities {
    pub airline: String,
    pub top_cities: Vec<CityCount>,
}

/// Great-circle distance between two airports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distance {
    pub src: String,
    pub dst: String,
    pub distance_km: f64,
    pub distance_mi: f64,
}

/// Row of the all-airlines report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineRow {
    pub id: AirlineId,
    pub name: String,
    pub iata: String,
    pub icao: String,
    pub country: String,
    pub active: String,
}

impl From<&Airline> for AirlineRow {
    fn from(a: &Airline) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            iata: a.iata.clone(),
            icao: a.icao.clone(),
            country: a.country.clone(),
            active: a.active.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlinesReport {
    pub count: usize,
    pub airlines: Vec<AirlineRow>,
}

/// Row of the all-airports report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRow {
    pub id: AirportId,
    pub name: String,
    pub iata: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Airport> for AirportRow {
    fn from(a: &Airport) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            iata: a.iata.clone(),
            city: a.city.clone(),
            country: a.country.clone(),
            latitude: a.latitude,
            longitude: a.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportsReport {
    pub count: usize,
    pub airports: Vec<AirportRow>,
}

/// Airport served by an airline, with how often it appears in the airline's routes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRouteCount {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub routes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineRoutesReport {
    pub airline: AirlineSummary,
    pub airports: Vec<AirportRouteCount>,
    pub count: usize,
}

/// Airline serving an airport, with its number of routes touching the airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineRouteCount {
    pub iata: String,
    pub name: String,
    pub country: String,
    pub routes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRoutesReport {
    pub airport: AirportSummary,
    pub airlines: Vec<AirlineRouteCount>,
    pub count: usize,
}

/// A one-stop connection through a hub airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub hub_iata: String,
    pub hub_name: String,
    pub hub_city: String,
    pub leg1_km: f64,
    pub leg2_km: f64,
    pub total_km: f64,
    pub total_mi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneHopReport {
    pub src: String,
    pub dst: String,
    pub connections: Vec<Connection>,
    pub count: usize,
}
