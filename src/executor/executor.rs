//! Query executor for flightdb
//!
//! Answers lookups and reports from a borrowed store. Nothing here mutates.
//!
//! Reports are built in three steps:
//! 1. Resolve the subject by IATA code through the index
//! 2. Scan routes, grouping and counting into a hash map
//! 3. Resolve group keys through the tables, sort, and shape the rows

use std::collections::{HashMap, HashSet};

use crate::geo::km_to_miles;
use crate::schema::{Airline, AirlineId, Airport, AirportId, EntityKind};
use crate::storage::{FlightStore, StoreError, StoreResult};

use super::result::{
    AirlineRouteCount, AirlineRoutesReport, AirlineRow, AirlineSummary, AirlinesForAirport,
    AirlinesReport, AirportRouteCount, AirportRoutesReport, AirportRow, AirportSummary,
    AirportsReport, CityCount, Connection, Distance, OneHopReport, TopCities,
};
use super::sorter::{HubLegs, ResultSorter};

/// Number of rows returned by the top destination cities query
pub const TOP_CITY_LIMIT: usize = 3;

/// Read-only query executor over a store
pub struct QueryExecutor<'a> {
    store: &'a FlightStore,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    // ==================
    // Lookups
    // ==================

    /// Airline holding exactly this IATA code
    pub fn airline_by_code(&self, code: &str) -> StoreResult<&'a Airline> {
        self.store
            .airlines()
            .get_by_code(code)
            .ok_or_else(|| StoreError::not_found(EntityKind::Airline, code))
    }

    /// Airport holding exactly this IATA code
    pub fn airport_by_code(&self, code: &str) -> StoreResult<&'a Airport> {
        self.airport_as(code, EntityKind::Airport)
    }

    fn airport_as(&self, code: &str, kind: EntityKind) -> StoreResult<&'a Airport> {
        self.store
            .airports()
            .get_by_code(code)
            .ok_or_else(|| StoreError::not_found(kind, code))
    }

    /// Source then destination airport of a two-airport query
    fn airport_pair(&self, src: &str, dst: &str) -> StoreResult<(&'a Airport, &'a Airport)> {
        let src = self.airport_as(src, EntityKind::SourceAirport)?;
        let dst = self.airport_as(dst, EntityKind::DestinationAirport)?;
        Ok((src, dst))
    }

    // ==================
    // Airport and airline queries
    // ==================

    /// Airlines flying into an airport, ascending by IATA code.
    pub fn airlines_for_airport(&self, code: &str) -> StoreResult<AirlinesForAirport> {
        let airport = self.airport_by_code(code)?;

        let airline_ids: HashSet<AirlineId> = self
            .store
            .routes()
            .iter()
            .filter(|r| r.dst_airport_id == airport.id)
            .map(|r| r.airline_id)
            .collect();

        let mut airlines: Vec<&Airline> = airline_ids
            .into_iter()
            .filter_map(|id| self.store.airlines().get(id))
            .collect();
        ResultSorter::sort_by_code(&mut airlines);

        let airlines: Vec<AirlineSummary> = airlines.into_iter().map(AirlineSummary::from).collect();
        Ok(AirlinesForAirport {
            airport: airport.iata.clone(),
            count: airlines.len(),
            airlines,
        })
    }

    /// Top destination cities of an airline, limited to `TOP_CITY_LIMIT`.
    pub fn top_cities_for_airline(&self, code: &str) -> StoreResult<TopCities> {
        self.top_cities(code, TOP_CITY_LIMIT)
    }

    /// Destination cities of an airline by route count, descending.
    ///
    /// Airports are grouped by city name, so two airports in the same city
    /// count together. Equal counts are ordered by city name.
    pub fn top_cities(&self, code: &str, limit: usize) -> StoreResult<TopCities> {
        let airline = self.airline_by_code(code)?;

        let mut city_counts: HashMap<&str, usize> = HashMap::new();
        for route in self.store.routes().iter().filter(|r| r.airline_id == airline.id) {
            if let Some(dst) = self.store.airports().get(route.dst_airport_id) {
                *city_counts.entry(dst.city.as_str()).or_insert(0) += 1;
            }
        }

        let mut rows: Vec<(&str, usize)> = city_counts.into_iter().collect();
        ResultSorter::sort_by_count_then_label(&mut rows);
        rows.truncate(limit);

        Ok(TopCities {
            airline: airline.iata.clone(),
            top_cities: rows
                .into_iter()
                .map(|(city, routes)| CityCount {
                    city: city.to_string(),
                    routes,
                })
                .collect(),
        })
    }

    /// Great-circle distance between two airports
    pub fn distance(&self, src: &str, dst: &str) -> StoreResult<Distance> {
        let (src, dst) = self.airport_pair(src, dst)?;
        let km = src.position().distance_km(&dst.position());

        Ok(Distance {
            src: src.iata.clone(),
            dst: dst.iata.clone(),
            distance_km: km,
            distance_mi: km_to_miles(km),
        })
    }

    // ==================
    // Reports
    // ==================

    /// Every airline, ascending by IATA code
    pub fn airlines_report(&self) -> AirlinesReport {
        let mut airlines: Vec<&Airline> = self.store.airlines().iter().collect();
        ResultSorter::sort_by_code(&mut airlines);

        AirlinesReport {
            count: airlines.len(),
            airlines: airlines.into_iter().map(AirlineRow::from).collect(),
        }
    }

    /// Every airport, ascending by IATA code
    pub fn airports_report(&self) -> AirportsReport {
        let mut airports: Vec<&Airport> = self.store.airports().iter().collect();
        ResultSorter::sort_by_code(&mut airports);

        AirportsReport {
            count: airports.len(),
            airports: airports.into_iter().map(AirportRow::from).collect(),
        }
    }

    /// Airports served by an airline, by number of route endpoints.
    ///
    /// Source and destination appearances both count, so an airport at both
    /// ends of different routes accumulates both.
    pub fn airline_routes_report(&self, code: &str) -> StoreResult<AirlineRoutesReport> {
        let airline = self.airline_by_code(code)?;

        let mut counts: HashMap<AirportId, usize> = HashMap::new();
        for route in self.store.routes().iter().filter(|r| r.airline_id == airline.id) {
            *counts.entry(route.src_airport_id).or_insert(0) += 1;
            *counts.entry(route.dst_airport_id).or_insert(0) += 1;
        }

        let mut rows: Vec<(&Airport, usize)> = counts
            .into_iter()
            .filter_map(|(id, n)| self.store.airports().get(id).map(|a| (a, n)))
            .collect();
        ResultSorter::sort_by_count_then_code(&mut rows);

        let airports: Vec<AirportRouteCount> = rows
            .into_iter()
            .map(|(a, routes)| AirportRouteCount {
                iata: a.iata.clone(),
                name: a.name.clone(),
                city: a.city.clone(),
                country: a.country.clone(),
                routes,
            })
            .collect();

        Ok(AirlineRoutesReport {
            airline: AirlineSummary::from(airline),
            count: airports.len(),
            airports,
        })
    }

    /// Airlines serving an airport, by number of routes touching it.
    ///
    /// A route counts once whether the airport is its source or destination.
    pub fn airport_routes_report(&self, code: &str) -> StoreResult<AirportRoutesReport> {
        let airport = self.airport_by_code(code)?;

        let mut counts: HashMap<AirlineId, usize> = HashMap::new();
        for route in self.store.routes().iter().filter(|r| r.touches(airport.id)) {
            *counts.entry(route.airline_id).or_insert(0) += 1;
        }

        let mut rows: Vec<(&Airline, usize)> = counts
            .into_iter()
            .filter_map(|(id, n)| self.store.airlines().get(id).map(|a| (a, n)))
            .collect();
        ResultSorter::sort_by_count_then_code(&mut rows);

        let airlines: Vec<AirlineRouteCount> = rows
            .into_iter()
            .map(|(a, routes)| AirlineRouteCount {
                iata: a.iata.clone(),
                name: a.name.clone(),
                country: a.country.clone(),
                routes,
            })
            .collect();

        Ok(AirportRoutesReport {
            airport: AirportSummary::from(airport),
            count: airlines.len(),
            airlines,
        })
    }

    // ==================
    // Graph queries
    // ==================

    /// One-stop connections from `src` to `dst`, shortest total distance first.
    ///
    /// A hub qualifies when some route lands on it from `src` and some route
    /// leaves it for `dst`. The two legs need not be flown by the same airline.
    pub fn one_hop(&self, src: &str, dst: &str) -> StoreResult<OneHopReport> {
        let (src, dst) = self.airport_pair(src, dst)?;
        let routes = self.store.routes();

        let from_src: HashSet<AirportId> = routes
            .iter()
            .filter(|r| r.src_airport_id == src.id)
            .map(|r| r.dst_airport_id)
            .collect();
        let to_dst: HashSet<AirportId> = routes
            .iter()
            .filter(|r| r.dst_airport_id == dst.id)
            .map(|r| r.src_airport_id)
            .collect();

        let (src_pos, dst_pos) = (src.position(), dst.position());
        let mut hubs: Vec<HubLegs<'_>> = from_src
            .intersection(&to_dst)
            .filter_map(|id| self.store.airports().get(*id))
            .map(|hub| {
                let leg1_km = src_pos.distance_km(&hub.position());
                let leg2_km = hub.position().distance_km(&dst_pos);
                HubLegs {
                    hub,
                    leg1_km,
                    leg2_km,
                    total_km: leg1_km + leg2_km,
                }
            })
            .collect();
        ResultSorter::sort_by_total_distance(&mut hubs);

        let connections: Vec<Connection> = hubs
            .into_iter()
            .map(|h| Connection {
                hub_iata: h.hub.iata.clone(),
                hub_name: h.hub.name.clone(),
                hub_city: h.hub.city.clone(),
                leg1_km: h.leg1_km,
                leg2_km: h.leg2_km,
                total_km: h.total_km,
                total_mi: km_to_miles(h.total_km),
            })
            .collect();

        Ok(OneHopReport {
            src: src.iata.clone(),
            dst: dst.iata.clone(),
            count: connections.len(),
            connections,
        })
    }
}
