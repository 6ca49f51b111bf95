//! Store Invariant Tests
//!
//! Tests for mutation invariants:
//! - Every indexed code resolves to a record holding that code
//! - Deletes cascade to every dependent route
//! - Rejected mutations leave the store unchanged

use flightdb::mutation::MutationEngine;
use flightdb::schema::{Airline, AirlinePatch, Airport, AirportPatch, EntityKind, Route, RouteKey};
use flightdb::storage::{FlightStore, RouteField, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn airline(id: i32, iata: &str) -> Airline {
    Airline {
        id,
        name: format!("Airline {}", iata),
        iata: iata.to_string(),
        active: "Y".to_string(),
        ..Default::default()
    }
}

fn airport(id: i32, iata: &str) -> Airport {
    Airport {
        id,
        name: format!("{} Airport", iata),
        city: format!("{} City", iata),
        iata: iata.to_string(),
        ..Default::default()
    }
}

fn network() -> FlightStore {
    FlightStore::from_records(
        vec![airline(10, "XX"), airline(20, "YY")],
        vec![airport(1, "AAA"), airport(2, "BBB"), airport(3, "CCC")],
        vec![
            Route::new(10, 1, 2),
            Route::new(10, 2, 3),
            Route::new(20, 1, 3),
            Route::new(20, 3, 1),
        ],
    )
}

/// Every code in an index names a record that holds it.
fn assert_indexes_consistent(store: &FlightStore) {
    for airline in store.airlines().iter() {
        if let Some(id) = store.airlines().code_index().lookup(&airline.iata) {
            assert_eq!(store.airlines().get(id).unwrap().iata, airline.iata);
        }
    }
    for airport in store.airports().iter() {
        if let Some(id) = store.airports().code_index().lookup(&airport.iata) {
            assert_eq!(store.airports().get(id).unwrap().iata, airport.iata);
        }
    }
}

// =============================================================================
// Bulk Load Tests
// =============================================================================

/// Duplicate codes in bulk data resolve to the highest id.
#[test]
fn test_bulk_duplicate_code_highest_id_wins() {
    let store = FlightStore::from_records(
        vec![airline(30, "DU"), airline(5, "DU"), airline(12, "DU")],
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(store.airlines().get_by_code("DU").unwrap().id, 30);
    assert_indexes_consistent(&store);
}

/// Records with an empty code are stored but never indexed.
#[test]
fn test_empty_code_not_indexed() {
    let store = FlightStore::from_records(vec![airline(1, "")], Vec::new(), Vec::new());

    assert!(store.airlines().contains(1));
    assert!(store.airlines().code_index().is_empty());
    assert!(store.airlines().get_by_code("").is_none());
}

// =============================================================================
// Insert Tests
// =============================================================================

/// Inserted airline is reachable by id and by code.
#[test]
fn test_insert_then_lookup() {
    let mut store = network();
    MutationEngine::new(&mut store)
        .insert_airline(airline(30, "ZZ"))
        .unwrap();

    assert_eq!(store.airlines().get_by_code("ZZ").unwrap().id, 30);
    assert_eq!(store.airlines().len(), 3);
    assert_indexes_consistent(&store);
}

/// Duplicate id is rejected and the existing record is kept.
#[test]
fn test_insert_duplicate_id_rejected() {
    let mut store = network();
    let err = MutationEngine::new(&mut store)
        .insert_airport(airport(1, "NEW"))
        .unwrap_err();

    assert_eq!(err, StoreError::duplicate_key(EntityKind::Airport, 1));
    assert_eq!(store.airports().get(1).unwrap().iata, "AAA");
    assert!(store.airports().get_by_code("NEW").is_none());
}

/// Route with unknown airline is rejected, route count unchanged.
#[test]
fn test_insert_route_unknown_airline() {
    let mut store = network();
    let before = store.routes().len();

    let err = MutationEngine::new(&mut store)
        .insert_route(Route::new(99, 1, 2))
        .unwrap_err();

    assert_eq!(err, StoreError::invalid_reference(RouteField::Airline, 99));
    assert_eq!(store.routes().len(), before);
}

/// Reference checks run airline, then source, then destination.
#[test]
fn test_insert_route_reports_first_bad_reference() {
    let mut store = network();
    let mut engine = MutationEngine::new(&mut store);

    assert_eq!(
        engine.insert_route(Route::new(10, 77, 88)).unwrap_err(),
        StoreError::invalid_reference(RouteField::SourceAirport, 77)
    );
    assert_eq!(
        engine.insert_route(Route::new(10, 1, 88)).unwrap_err(),
        StoreError::invalid_reference(RouteField::DestinationAirport, 88)
    );
}

/// Identical routes may coexist.
#[test]
fn test_insert_identical_route_appends() {
    let mut store = network();
    MutationEngine::new(&mut store)
        .insert_route(Route::new(10, 1, 2))
        .unwrap();

    let matching = store
        .routes()
        .iter()
        .filter(|r| r.key() == Route::new(10, 1, 2).key())
        .count();
    assert_eq!(matching, 2);
}

// =============================================================================
// Update Tests
// =============================================================================

/// Partial update changes only supplied fields.
#[test]
fn test_partial_update_keeps_other_fields() {
    let mut store = network();
    let patch = AirlinePatch {
        country: Some("Canada".to_string()),
        ..Default::default()
    };

    MutationEngine::new(&mut store)
        .update_airline(10, &patch)
        .unwrap();

    let updated = store.airlines().get(10).unwrap();
    assert_eq!(updated.country, "Canada");
    assert_eq!(updated.name, "Airline XX");
    assert_eq!(updated.iata, "XX");
}

/// Changing a code moves the index entry.
#[test]
fn test_update_code_moves_index_entry() {
    let mut store = network();
    let patch = AirportPatch {
        iata: Some("ZZZ".to_string()),
        ..Default::default()
    };

    MutationEngine::new(&mut store)
        .update_airport(2, &patch)
        .unwrap();

    assert!(store.airports().get_by_code("BBB").is_none());
    assert_eq!(store.airports().get_by_code("ZZZ").unwrap().id, 2);
    assert_indexes_consistent(&store);
}

/// Updating a missing id is NotFound.
#[test]
fn test_update_missing_record() {
    let mut store = network();
    let err = MutationEngine::new(&mut store)
        .update_airline(404, &AirlinePatch::default())
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }));
}

// =============================================================================
// Cascade Delete Tests
// =============================================================================

/// Deleting an airline removes it, its code and all its routes.
#[test]
fn test_delete_airline_cascades() {
    let mut store = network();
    let removed = MutationEngine::new(&mut store).delete_airline(10).unwrap();

    assert_eq!(removed, 2);
    assert!(!store.airlines().contains(10));
    assert!(store.airlines().get_by_code("XX").is_none());
    assert!(store.routes().iter().all(|r| r.airline_id != 10));
    assert_eq!(store.routes().len(), 2);
}

/// Deleting an airport removes routes on either end.
#[test]
fn test_delete_airport_cascades_both_ends() {
    let mut store = network();
    let removed = MutationEngine::new(&mut store).delete_airport(3).unwrap();

    assert_eq!(removed, 3);
    assert!(store.routes().iter().all(|r| !r.touches(3)));
    assert_eq!(store.routes(), &[Route::new(10, 1, 2)]);
}

/// Deleting a missing airline changes nothing.
#[test]
fn test_delete_missing_airline() {
    let mut store = network();
    let err = MutationEngine::new(&mut store).delete_airline(99).unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(store.routes().len(), 4);
}

/// Route delete removes every matching triple.
#[test]
fn test_delete_routes_removes_all_matches() {
    let mut store = network();
    let mut engine = MutationEngine::new(&mut store);
    engine.insert_route(Route::new(20, 1, 3)).unwrap();

    let removed = engine
        .delete_routes(RouteKey {
            airline_id: 20,
            src_airport_id: 1,
            dst_airport_id: 3,
        })
        .unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.routes().len(), 3);
}

/// Route delete with no match is NotFound.
#[test]
fn test_delete_routes_no_match() {
    let mut store = network();
    let err = MutationEngine::new(&mut store)
        .delete_routes(Route::new(20, 2, 1).key())
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::Route,
            ..
        }
    ));
}
