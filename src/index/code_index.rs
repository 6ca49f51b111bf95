//! IATA code index
//!
//! # API
//!
//! - `rebuild(records)` - Rebuild from (code, id) pairs
//! - `claim(code, id)` - Point a code at a record, overwriting any previous owner
//! - `release(code, id)` - Drop a code only if it still points at `id`
//! - `lookup(code)` - Exact match lookup

use std::collections::HashMap;

/// Maps a non-empty IATA code to the id of the record holding it
#[derive(Debug, Clone, Default)]
pub struct CodeIndex {
    entries: HashMap<String, i32>,
}

impl CodeIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from scratch.
    ///
    /// Pairs are applied in the order given, so when two records share a code
    /// the later one wins.
    pub fn rebuild<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        self.entries.clear();
        for (code, id) in records {
            self.claim(code, id);
        }
    }

    /// Point `code` at record `id`. Empty codes are ignored.
    pub fn claim(&mut self, code: &str, id: i32) {
        if code.is_empty() {
            return;
        }
        self.entries.insert(code.to_string(), id);
    }

    /// Remove the entry for `code` if it currently points at `id`.
    ///
    /// Returns true if an entry was removed.
    pub fn release(&mut self, code: &str, id: i32) -> bool {
        match self.entries.get(code) {
            Some(&owner) if owner == id => {
                self.entries.remove(code);
                true
            }
            _ => false,
        }
    }

    /// Exact-match lookup
    pub fn lookup(&self, code: &str) -> Option<i32> {
        self.entries.get(code).copied()
    }

    /// Number of indexed codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no codes are indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
