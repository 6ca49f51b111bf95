//! Mutation engine for flightdb
//!
//! The only writer of the store. Each operation runs against a `&mut
//! FlightStore`, which in a server means under the store's write lock, so the
//! whole operation (cascade included) is applied before any reader sees it.
//!
//! # Integrity rules
//!
//! - Airline and airport ids are unique per table
//! - A route may only be inserted when its airline and both airports exist
//! - Deleting an airline or airport deletes every route that references it

mod engine;

pub use engine::MutationEngine;
