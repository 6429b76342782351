//! Generic in-memory record store

use std::collections::HashMap;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::model::{Record, RecordId};
use crate::observability;
use crate::schema::validate_record;

/// First id assigned to an empty store
const FIRST_ID: RecordId = 1;

/// In-memory owner of one record collection.
///
/// Records live in an insertion-ordered vector; an id -> position index
/// backs all by-id lookups. Instances are constructed explicitly and
/// passed by reference, there is no ambient global store.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    by_id: HashMap<RecordId, usize>,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Creates a store holding the given seed records.
    ///
    /// Seed ids are taken as-is; later `add` calls assign strictly greater
    /// ids.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` when two seed records share an id.
    pub fn with_seed(seed: Vec<R>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in seed {
            let id = record.id();
            if store.by_id.contains_key(&id) {
                return Err(StoreError::DuplicateId { kind: R::KIND, id });
            }
            store.by_id.insert(id, store.records.len());
            store.records.push(record);
        }
        observability::store_seeded(R::KIND, store.records.len());
        Ok(store)
    }

    /// Returns all records in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Returns the record with the given id, if present
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates a partial record, assigns the next id and appends it.
    ///
    /// The assigned id is one greater than the current maximum, or 1 for
    /// an empty store; any id supplied in `partial` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns the schema error when validation fails; the store is
    /// unchanged in that case.
    pub fn add(&mut self, partial: &Value) -> StoreResult<&R> {
        let mut record = match R::from_partial(partial) {
            Ok(record) => record,
            Err(e) => {
                observability::validation_rejected(R::KIND, &e);
                return Err(e.into());
            }
        };

        let id = self.next_id();
        record.set_id(id);
        self.by_id.insert(id, self.records.len());
        self.records.push(record);

        observability::record_added(R::KIND, id);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Overwrites the stored record that has `record`'s id, field-wise.
    ///
    /// The incoming record is re-validated against the schema rules before
    /// the overwrite commits.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when no record has the incoming id, or the
    /// schema error when re-validation fails. The store is unchanged on
    /// either failure.
    pub fn update(&mut self, record: R) -> StoreResult<()> {
        let id = record.id();
        let pos = *self
            .by_id
            .get(&id)
            .ok_or(StoreError::RecordNotFound { kind: R::KIND, id })?;

        let value = record.to_value()?;
        if let Err(e) = validate_record(&R::schema(), &value) {
            observability::validation_rejected(R::KIND, &e);
            return Err(e.into());
        }

        self.records[pos] = record;
        observability::record_updated(R::KIND, id);
        Ok(())
    }

    /// Removes and returns the record with the given id.
    ///
    /// Exactly one record is removed; listing order of the remaining
    /// records is preserved.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when the id is absent.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<R> {
        let pos = self
            .by_id
            .remove(&id)
            .ok_or(StoreError::RecordNotFound { kind: R::KIND, id })?;

        let removed = self.records.remove(pos);

        // Positions after the removed slot shift left by one
        for slot in self.by_id.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        observability::record_deleted(R::KIND, id);
        Ok(removed)
    }

    fn next_id(&self) -> RecordId {
        self.by_id.keys().copied().max().map_or(FIRST_ID, |max| max + 1)
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
