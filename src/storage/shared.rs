//! Thread-safe handle to the store
//!
//! One read-write lock guards all three tables and their indexes together, so
//! a cascading delete is never observed half done.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::store::FlightStore;

/// Cloneable, shared handle to a `FlightStore`
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<FlightStore>>,
}

impl SharedStore {
    pub fn new(store: FlightStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Acquire shared read access
    pub fn read(&self) -> StoreResult<RwLockReadGuard<'_, FlightStore>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    /// Acquire exclusive write access
    pub fn write(&self) -> StoreResult<RwLockWriteGuard<'_, FlightStore>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl From<FlightStore> for SharedStore {
    fn from(store: FlightStore) -> Self {
        Self::new(store)
    }
}
