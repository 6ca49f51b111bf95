//! Record types for the flight network tables

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Airline primary key
pub type AirlineId = i32;

/// Airport primary key
pub type AirportId = i32;

/// What a lookup or mutation was aimed at, used when reporting failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Airline,
    Airport,
    /// Airport resolved in the source position of a two-airport query
    SourceAirport,
    /// Airport resolved in the destination position of a two-airport query
    DestinationAirport,
    Route,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Airline => "Airline",
            EntityKind::Airport => "Airport",
            EntityKind::SourceAirport => "Source airport",
            EntityKind::DestinationAirport => "Destination airport",
            EntityKind::Route => "Route",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record owned by a keyed table and indexed by its IATA code.
pub trait Record {
    /// Entity kind reported in errors
    const KIND: EntityKind;

    /// Primary key
    fn id(&self) -> i32;

    /// IATA code, empty when the record has none
    fn code(&self) -> &str;
}

/// An airline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: AirlineId,
    pub name: String,
    pub alias: String,
    pub iata: String,
    pub icao: String,
    pub callsign: String,
    pub country: String,
    /// Free-form, "Y" or "N" by convention
    pub active: String,
}

impl Record for Airline {
    const KIND: EntityKind = EntityKind::Airline;

    fn id(&self) -> i32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.iata
    }
}

/// An airport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    /// Degrees
    pub latitude: f64,
    /// Degrees
    pub longitude: f64,
}

impl Airport {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl Record for Airport {
    const KIND: EntityKind = EntityKind::Airport;

    fn id(&self) -> i32 {
        self.id
    }

    fn code(&self) -> &str {
        &self.iata
    }
}

/// A directed route flown by one airline between two airports.
///
/// Routes have no identity of their own; the same tuple may appear more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub airline_id: AirlineId,
    pub src_airport_id: AirportId,
    pub dst_airport_id: AirportId,
    pub stops: i32,
}

impl Route {
    pub fn new(airline_id: AirlineId, src_airport_id: AirportId, dst_airport_id: AirportId) -> Self {
        Self {
            airline_id,
            src_airport_id,
            dst_airport_id,
            stops: 0,
        }
    }

    /// The (airline, source, destination) tuple used to match routes for deletion
    pub fn key(&self) -> RouteKey {
        RouteKey {
            airline_id: self.airline_id,
            src_airport_id: self.src_airport_id,
            dst_airport_id: self.dst_airport_id,
        }
    }

    /// True if the airport is either endpoint
    pub fn touches(&self, airport_id: AirportId) -> bool {
        self.src_airport_id == airport_id || self.dst_airport_id == airport_id
    }
}

/// Route match key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteKey {
    pub airline_id: AirlineId,
    pub src_airport_id: AirportId,
    pub dst_airport_id: AirportId,
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "airline {} from {} to {}",
            self.airline_id, self.src_airport_id, self.dst_airport_id
        )
    }
}

fn default_active() -> String {
    "Y".to_string()
}

/// Insert payload for an airline
#[derive(Debug, Clone, Deserialize)]
pub struct NewAirline {
    pub id: AirlineId,
    pub name: String,
    pub iata: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub icao: String,
    #[serde(default)]
    pub callsign: String,
    #[serde(default)]
    pub country: String,
    #[serde(default = "default_active")]
    pub active: String,
}

impl From<NewAirline> for Airline {
    fn from(new: NewAirline) -> Self {
        Self {
            id: new.id,
            name: new.name,
            alias: new.alias,
            iata: new.iata,
            icao: new.icao,
            callsign: new.callsign,
            country: new.country,
            active: new.active,
        }
    }
}

/// Insert payload for an airport
#[derive(Debug, Clone, Deserialize)]
pub struct NewAirport {
    pub id: AirportId,
    pub name: String,
    pub iata: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub icao: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl From<NewAirport> for Airport {
    fn from(new: NewAirport) -> Self {
        Self {
            id: new.id,
            name: new.name,
            city: new.city,
            country: new.country,
            iata: new.iata,
            icao: new.icao,
            latitude: new.latitude,
            longitude: new.longitude,
        }
    }
}

/// Insert payload for a route
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub airline_id: AirlineId,
    pub src_airport_id: AirportId,
    pub dst_airport_id: AirportId,
    #[serde(default)]
    pub stops: i32,
}

impl From<NewRoute> for Route {
    fn from(new: NewRoute) -> Self {
        Self {
            airline_id: new.airline_id,
            src_airport_id: new.src_airport_id,
            dst_airport_id: new.dst_airport_id,
            stops: new.stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_airline_defaults() {
        let new: NewAirline =
            serde_json::from_value(json!({"id": 7, "name": "Test Air", "iata": "TA"})).unwrap();
        let airline = Airline::from(new);

        assert_eq!(airline.active, "Y");
        assert_eq!(airline.icao, "");
        assert_eq!(airline.callsign, "");
    }

    #[test]
    fn test_new_airline_requires_iata() {
        let result: Result<NewAirline, _> =
            serde_json::from_value(json!({"id": 7, "name": "Test Air"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_airport_default_coordinates() {
        let new: NewAirport =
            serde_json::from_value(json!({"id": 1, "name": "Nowhere", "iata": "NWH"})).unwrap();
        assert_eq!(new.latitude, 0.0);
        assert_eq!(new.longitude, 0.0);
    }

    #[test]
    fn test_route_payload_camel_case() {
        let new: NewRoute = serde_json::from_value(
            json!({"airlineId": 10, "srcAirportId": 1, "dstAirportId": 2}),
        )
        .unwrap();
        let route = Route::from(new);

        assert_eq!(route.key(), Route::new(10, 1, 2).key());
        assert_eq!(route.stops, 0);
    }

    #[test]
    fn test_route_touches() {
        let route = Route::new(1, 10, 20);
        assert!(route.touches(10));
        assert!(route.touches(20));
        assert!(!route.touches(30));
    }
}
