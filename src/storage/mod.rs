//! In-memory storage for flightdb
//!
//! Holds the airline, airport and route tables plus the IATA code indexes
//! derived from them. Nothing is persisted; tables are filled by the loader
//! at startup and changed afterwards only through the mutation engine.
//!
//! # Invariants
//!
//! - Ids are unique per table and the table owns each record
//! - A code index entry always names the record currently holding that code
//! - Every stored route references a live airline and two live airports

mod errors;
mod shared;
mod store;
mod table;

pub use errors::{RouteField, StoreError, StoreResult};
pub use shared::SharedStore;
pub use store::{FlightStore, StoreStats};
pub use table::Table;
