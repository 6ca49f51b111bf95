//! Partial update payloads
//!
//! Every field is optional. Fields left out keep their current value; fields
//! the payload does not recognize are ignored during deserialization.

use serde::Deserialize;

use super::types::{Airline, Airport};

/// A partial update that can be applied to a record in place
pub trait Patch<R> {
    fn apply(&self, record: &mut R);
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

/// Airline update payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirlinePatch {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub callsign: Option<String>,
    pub country: Option<String>,
    pub active: Option<String>,
}

impl Patch<Airline> for AirlinePatch {
    fn apply(&self, airline: &mut Airline) {
        set(&mut airline.name, &self.name);
        set(&mut airline.alias, &self.alias);
        set(&mut airline.iata, &self.iata);
        set(&mut airline.icao, &self.icao);
        set(&mut airline.callsign, &self.callsign);
        set(&mut airline.country, &self.country);
        set(&mut airline.active, &self.active);
    }
}

/// Airport update payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirportPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Patch<Airport> for AirportPatch {
    fn apply(&self, airport: &mut Airport) {
        set(&mut airport.name, &self.name);
        set(&mut airport.city, &self.city);
        set(&mut airport.country, &self.country);
        set(&mut airport.iata, &self.iata);
        set(&mut airport.icao, &self.icao);
        set(&mut airport.latitude, &self.latitude);
        set(&mut airport.longitude, &self.longitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_airport() -> Airport {
        Airport {
            id: 1,
            name: "Old Name".to_string(),
            city: "Springfield".to_string(),
            country: "Nowhere".to_string(),
            iata: "SPF".to_string(),
            icao: "KSPF".to_string(),
            latitude: 12.5,
            longitude: -45.25,
        }
    }

    #[test]
    fn test_patch_touches_only_supplied_fields() {
        let mut airport = sample_airport();
        let before = airport.clone();

        let patch: AirportPatch = serde_json::from_value(json!({"name": "New Name"})).unwrap();
        patch.apply(&mut airport);

        assert_eq!(airport.name, "New Name");
        assert_eq!(airport.city, before.city);
        assert_eq!(airport.iata, before.iata);
        assert_eq!(airport.latitude, before.latitude);
        assert_eq!(airport.longitude, before.longitude);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let patch: AirlinePatch =
            serde_json::from_value(json!({"country": "Canada", "fleet_size": 12})).unwrap();
        assert_eq!(patch.country.as_deref(), Some("Canada"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut airport = sample_airport();
        AirportPatch::default().apply(&mut airport);
        assert_eq!(airport, sample_airport());
    }
}
