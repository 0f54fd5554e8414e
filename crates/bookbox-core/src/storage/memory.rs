//! In-memory storage backend
//!
//! A simple BTreeMap-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use std::collections::BTreeMap;

use crate::record::{CatalogRecord, FieldUpdate, IdBounds, NewRecord, RecordId, SearchField};
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::CatalogStore;

/// In-memory catalog store.
///
/// Keyed by id in a BTreeMap, so iteration is primary-key order like the SQL backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<RecordId, CatalogRecord>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Create a memory store with initial records.
    pub fn with_records(records: Vec<CatalogRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            let _ = store.insert_with_id(record);
        }
        store
    }
}

impl CatalogStore for MemoryStore {
    fn id_bounds(&self) -> StoreResult<Option<IdBounds>> {
        let min = self.records.keys().next().copied();
        let max = self.records.keys().next_back().copied();
        Ok(min.zip(max).map(|(min, max)| IdBounds { min, max }))
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<CatalogRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn find_exact(&self, field: SearchField, value: &str) -> StoreResult<Vec<CatalogRecord>> {
        Ok(self
            .records
            .values()
            .filter(|r| r.text(field) == value)
            .cloned()
            .collect())
    }

    fn list_values(&self, field: SearchField) -> StoreResult<Vec<String>> {
        Ok(self
            .records
            .values()
            .map(|r| r.text(field).to_string())
            .collect())
    }

    fn all(&self) -> StoreResult<Vec<CatalogRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn insert_next(&mut self, record: NewRecord, first_id: RecordId) -> StoreResult<CatalogRecord> {
        let id = match self.records.keys().next_back() {
            Some(max) => max.next(),
            None => first_id,
        };
        let record = record.with_id(id);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn insert_with_id(&mut self, record: CatalogRecord) -> StoreResult<()> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::Integrity(format!(
                "record {} already exists",
                record.id
            )));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    fn update_field(&mut self, id: RecordId, update: &FieldUpdate) -> StoreResult<bool> {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: RecordId) -> StoreResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }
}
