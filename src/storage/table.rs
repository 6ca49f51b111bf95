//! Keyed entity table with an IATA code index
//!
//! The table owns its records. The code index holds ids only and every lookup
//! resolves back through the table.

use std::collections::HashMap;

use crate::index::CodeIndex;
use crate::schema::{Patch, Record};

use super::errors::{StoreError, StoreResult};

/// A table of records keyed by id, with a secondary index on code
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: HashMap<i32, R>,
    codes: CodeIndex,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            codes: CodeIndex::new(),
        }
    }
}

impl<R: Record> Table<R> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load records, then build the code index once.
    ///
    /// A later record with the same id replaces an earlier one.
    pub fn from_rows<I: IntoIterator<Item = R>>(records: I) -> Self {
        let mut table = Self::new();
        for record in records {
            table.rows.insert(record.id(), record);
        }
        table.rebuild_index();
        table
    }

    /// Re-derive the code index from the rows.
    ///
    /// Records are visited in ascending id order, so when several records
    /// carry the same code the one with the highest id owns it.
    pub fn rebuild_index(&mut self) {
        let mut ids: Vec<i32> = self.rows.keys().copied().collect();
        ids.sort_unstable();

        let rows = &self.rows;
        self.codes
            .rebuild(ids.iter().filter_map(|id| rows.get(id).map(|r| (r.code(), *id))));
    }

    pub fn get(&self, id: i32) -> Option<&R> {
        self.rows.get(&id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    /// Case-sensitive exact lookup by code
    pub fn get_by_code(&self, code: &str) -> Option<&R> {
        self.codes
            .lookup(code)
            .and_then(|id| self.rows.get(&id))
            .filter(|record| record.code() == code)
    }

    /// Insert a new record.
    ///
    /// Fails with `DuplicateKey` if the id is taken. A non-empty code claims
    /// the index entry, replacing whichever record held it before.
    pub fn insert(&mut self, record: R) -> StoreResult<()> {
        let id = record.id();
        if self.rows.contains_key(&id) {
            return Err(StoreError::duplicate_key(R::KIND, id));
        }

        self.codes.claim(record.code(), id);
        self.rows.insert(id, record);
        Ok(())
    }

    /// Apply a partial update to record `id` and keep the code index in step.
    pub fn update<P: Patch<R>>(&mut self, id: i32, patch: &P) -> StoreResult<&R> {
        let record = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;

        let old_code = record.code().to_string();
        patch.apply(record);

        if record.code() != old_code {
            self.codes.release(&old_code, id);
            self.codes.claim(record.code(), id);
        }

        Ok(record)
    }

    /// Remove record `id` together with its index entry.
    pub fn remove(&mut self, id: i32) -> StoreResult<R> {
        let record = self
            .rows
            .remove(&id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;

        self.codes.release(record.code(), id);
        Ok(record)
    }

    /// Iterate records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read access to the code index
    pub fn code_index(&self) -> &CodeIndex {
        &self.codes
    }
}
