//! Insert, update and delete operations with cross-table integrity

use tracing::{debug, info};

use crate::schema::{
    Airline, AirlineId, AirlinePatch, Airport, AirportId, AirportPatch, EntityKind, Route, RouteKey,
};
use crate::storage::{FlightStore, RouteField, StoreError, StoreResult};

/// Applies writes to a store while keeping indexes and route references valid
pub struct MutationEngine<'a> {
    store: &'a mut FlightStore,
}

impl<'a> MutationEngine<'a> {
    pub fn new(store: &'a mut FlightStore) -> Self {
        Self { store }
    }

    // ==================
    // Airlines
    // ==================

    /// Insert an airline. The id must not be in use.
    pub fn insert_airline(&mut self, airline: Airline) -> StoreResult<AirlineId> {
        let id = airline.id;
        self.store.airlines_mut().insert(airline)?;
        info!(airline_id = id, "airline inserted");
        Ok(id)
    }

    /// Apply a partial update to an airline
    pub fn update_airline(&mut self, id: AirlineId, patch: &AirlinePatch) -> StoreResult<&Airline> {
        let airline = self.store.airlines_mut().update(id, patch)?;
        info!(airline_id = id, iata = %airline.iata, "airline updated");
        Ok(airline)
    }

    /// Delete an airline and every route it flies.
    ///
    /// Returns the number of routes removed.
    pub fn delete_airline(&mut self, id: AirlineId) -> StoreResult<usize> {
        self.store.airlines_mut().remove(id)?;
        let removed = self.remove_routes_where(|r| r.airline_id == id);
        info!(airline_id = id, routes_removed = removed, "airline deleted");
        Ok(removed)
    }

    // ==================
    // Airports
    // ==================

    /// Insert an airport. The id must not be in use.
    pub fn insert_airport(&mut self, airport: Airport) -> StoreResult<AirportId> {
        let id = airport.id;
        self.store.airports_mut().insert(airport)?;
        info!(airport_id = id, "airport inserted");
        Ok(id)
    }

    /// Apply a partial update to an airport
    pub fn update_airport(&mut self, id: AirportId, patch: &AirportPatch) -> StoreResult<&Airport> {
        let airport = self.store.airports_mut().update(id, patch)?;
        info!(airport_id = id, iata = %airport.iata, "airport updated");
        Ok(airport)
    }

    /// Delete an airport and every route departing from or arriving at it.
    ///
    /// Returns the number of routes removed.
    pub fn delete_airport(&mut self, id: AirportId) -> StoreResult<usize> {
        self.store.airports_mut().remove(id)?;
        let removed = self.remove_routes_where(|r| r.touches(id));
        info!(airport_id = id, routes_removed = removed, "airport deleted");
        Ok(removed)
    }

    // ==================
    // Routes
    // ==================

    /// Append a route after checking the airline, source and destination exist.
    ///
    /// Checks run in that order and the first failure is reported.
    /// Identical routes are not deduplicated.
    pub fn insert_route(&mut self, route: Route) -> StoreResult<()> {
        if !self.store.airlines().contains(route.airline_id) {
            return Err(StoreError::invalid_reference(
                RouteField::Airline,
                route.airline_id,
            ));
        }
        if !self.store.airports().contains(route.src_airport_id) {
            return Err(StoreError::invalid_reference(
                RouteField::SourceAirport,
                route.src_airport_id,
            ));
        }
        if !self.store.airports().contains(route.dst_airport_id) {
            return Err(StoreError::invalid_reference(
                RouteField::DestinationAirport,
                route.dst_airport_id,
            ));
        }

        self.store.routes_mut().push(route);
        info!(route = %route.key(), stops = route.stops, "route inserted");
        Ok(())
    }

    /// Delete every route matching `key`.
    ///
    /// Returns the number removed; `NotFound` if nothing matched.
    pub fn delete_routes(&mut self, key: RouteKey) -> StoreResult<usize> {
        let removed = self.remove_routes_where(|r| r.key() == key);
        if removed == 0 {
            return Err(StoreError::not_found(EntityKind::Route, key));
        }

        info!(route = %key, removed, "routes deleted");
        Ok(removed)
    }

    fn remove_routes_where<F>(&mut self, matches: F) -> usize
    where
        F: Fn(&Route) -> bool,
    {
        let routes = self.store.routes_mut();
        let before = routes.len();
        routes.retain(|r| !matches(r));
        let removed = before - routes.len();
        debug!(before, after = routes.len(), "routes filtered");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airline(id: i32, iata: &str) -> Airline {
        Airline {
            id,
            name: format!("Airline {}", id),
            iata: iata.to_string(),
            active: "Y".to_string(),
            ..Default::default()
        }
    }

    fn airport(id: i32, iata: &str) -> Airport {
        Airport {
            id,
            name: format!("Airport {}", id),
            city: format!("City {}", id),
            iata: iata.to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> FlightStore {
        let mut store = FlightStore::new();
        {
            let mut engine = MutationEngine::new(&mut store);
            engine.insert_airline(airline(10, "XX")).unwrap();
            engine.insert_airline(airline(20, "YY")).unwrap();
            engine.insert_airport(airport(1, "AAA")).unwrap();
            engine.insert_airport(airport(2, "BBB")).unwrap();
            engine.insert_airport(airport(3, "CCC")).unwrap();
            engine.insert_route(Route::new(10, 1, 2)).unwrap();
            engine.insert_route(Route::new(10, 2, 3)).unwrap();
            engine.insert_route(Route::new(20, 3, 1)).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_airline_duplicate() {
        let mut store = seeded();
        let mut engine = MutationEngine::new(&mut store);

        let err = engine.insert_airline(airline(10, "ZZ")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { id: 10, .. }));
    }

    #[test]
    fn test_delete_airline_cascades() {
        let mut store = seeded();
        let removed = MutationEngine::new(&mut store).delete_airline(10).unwrap();

        assert_eq!(removed, 2);
        assert!(store.airlines().get(10).is_none());
        assert!(store.airlines().get_by_code("XX").is_none());
        assert!(store.routes().iter().all(|r| r.airline_id != 10));
        assert_eq!(store.routes().len(), 1);
    }

    #[test]
    fn test_delete_airport_cascades_both_directions() {
        let mut store = seeded();
        let removed = MutationEngine::new(&mut store).delete_airport(3).unwrap();

        assert_eq!(removed, 2);
        assert!(store.routes().iter().all(|r| !r.touches(3)));
        assert_eq!(store.routes(), &[Route::new(10, 1, 2)]);
    }

    #[test]
    fn test_delete_missing_airline() {
        let mut store = seeded();
        let err = MutationEngine::new(&mut store).delete_airline(99).unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.routes().len(), 3);
    }

    #[test]
    fn test_insert_route_checks_references_in_order() {
        let mut store = seeded();
        let mut engine = MutationEngine::new(&mut store);

        let err = engine.insert_route(Route::new(99, 98, 97)).unwrap_err();
        assert_eq!(err, StoreError::invalid_reference(RouteField::Airline, 99));

        let err = engine.insert_route(Route::new(10, 98, 97)).unwrap_err();
        assert_eq!(err, StoreError::invalid_reference(RouteField::SourceAirport, 98));

        let err = engine.insert_route(Route::new(10, 1, 97)).unwrap_err();
        assert_eq!(
            err,
            StoreError::invalid_reference(RouteField::DestinationAirport, 97)
        );

        assert_eq!(store.routes().len(), 3);
    }

    #[test]
    fn test_insert_route_allows_duplicates() {
        let mut store = seeded();
        MutationEngine::new(&mut store)
            .insert_route(Route::new(10, 1, 2))
            .unwrap();

        let count = store
            .routes()
            .iter()
            .filter(|r| r.key() == Route::new(10, 1, 2).key())
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_delete_routes_removes_all_matches() {
        let mut store = seeded();
        let mut engine = MutationEngine::new(&mut store);
        engine.insert_route(Route::new(10, 1, 2)).unwrap();

        let removed = engine.delete_routes(Route::new(10, 1, 2).key()).unwrap();
        assert_eq!(removed, 2);

        let err = engine.delete_routes(Route::new(10, 1, 2).key()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                kind: EntityKind::Route,
                ..
            }
        ));
        assert_eq!(store.routes().len(), 2);
    }

    #[test]
    fn test_update_airport_code() {
        let mut store = seeded();
        let patch = AirportPatch {
            iata: Some("DDD".to_string()),
            latitude: Some(10.0),
            ..Default::default()
        };

        let updated = MutationEngine::new(&mut store)
            .update_airport(1, &patch)
            .unwrap()
            .clone();

        assert_eq!(updated.iata, "DDD");
        assert_eq!(updated.latitude, 10.0);
        assert_eq!(updated.city, "City 1");
        assert!(store.airports().get_by_code("AAA").is_none());
        assert_eq!(store.airports().get_by_code("DDD").unwrap().id, 1);
    }
}
