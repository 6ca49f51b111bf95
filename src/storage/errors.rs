//! Store error types
//!
//! Error codes:
//! - FLIGHTDB_NOT_FOUND
//! - FLIGHTDB_DUPLICATE_KEY
//! - FLIGHTDB_INVALID_REFERENCE
//! - FLIGHTDB_LOCK_POISONED

use std::fmt;

use thiserror::Error;

use crate::schema::EntityKind;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Route field that failed a reference check on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    Airline,
    SourceAirport,
    DestinationAirport,
}

impl RouteField {
    /// Payload field name
    pub fn field_name(&self) -> &'static str {
        match self {
            RouteField::Airline => "airlineId",
            RouteField::SourceAirport => "srcAirportId",
            RouteField::DestinationAirport => "dstAirportId",
        }
    }
}

impl fmt::Display for RouteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteField::Airline => write!(f, "airline ID"),
            RouteField::SourceAirport => write!(f, "source airport ID"),
            RouteField::DestinationAirport => write!(f, "destination airport ID"),
        }
    }
}

/// Errors raised by table, query and mutation operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Lookup by id or code matched nothing
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    /// Insert with an id already in use
    #[error("{kind} ID already exists: {id}")]
    DuplicateKey { kind: EntityKind, id: i32 },

    /// Route insert referencing a record that does not exist
    #[error("Invalid {field}: {id}")]
    InvalidReference { field: RouteField, id: i32 },

    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn not_found(kind: EntityKind, key: impl fmt::Display) -> Self {
        StoreError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn duplicate_key(kind: EntityKind, id: i32) -> Self {
        StoreError::DuplicateKey { kind, id }
    }

    pub fn invalid_reference(field: RouteField, id: i32) -> Self {
        StoreError::InvalidReference { field, id }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "FLIGHTDB_NOT_FOUND",
            StoreError::DuplicateKey { .. } => "FLIGHTDB_DUPLICATE_KEY",
            StoreError::InvalidReference { .. } => "FLIGHTDB_INVALID_REFERENCE",
            StoreError::LockPoisoned => "FLIGHTDB_LOCK_POISONED",
        }
    }
}
