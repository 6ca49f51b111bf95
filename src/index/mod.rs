//! Secondary indexes for flightdb
//!
//! Indexes are derived, in-memory state built from the tables.
//!
//! # Design Principles
//!
//! - Derived state: the table is the source of truth, the index only stores ids
//! - Exact match: codes are compared case-sensitively, byte for byte
//! - Kept in step: every table mutation updates the index before returning
//!
//! # Invariants
//!
//! - An entry `code -> id` exists only while record `id` holds `code`
//! - Empty codes are never indexed

mod code_index;

pub use code_index::CodeIndex;
