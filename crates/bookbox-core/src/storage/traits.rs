//! Storage trait definitions

use crate::record::{CatalogRecord, FieldUpdate, IdBounds, NewRecord, RecordId, SearchField};
use crate::storage::error::StoreResult;

/// Core storage operations for the catalog.
///
/// A table of records keyed uniquely by integer id. Every mutating call must be
/// durably committed before it returns. Ordered reads (`all`, `list_values`,
/// `find_exact`) iterate in primary-key order so repeated calls are stable.
pub trait CatalogStore {
    /// Current minimum and maximum id, or `None` for an empty catalog.
    fn id_bounds(&self) -> StoreResult<Option<IdBounds>>;

    /// Retrieve a record by id.
    ///
    /// Returns `None` if not found.
    fn get(&self, id: RecordId) -> StoreResult<Option<CatalogRecord>>;

    /// Check if a record exists.
    fn exists(&self, id: RecordId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// All records whose `field` equals `value` exactly.
    fn find_exact(&self, field: SearchField, value: &str) -> StoreResult<Vec<CatalogRecord>>;

    /// The value of `field` for every record, duplicates included.
    ///
    /// Used to supply candidates to the resolver.
    fn list_values(&self, field: SearchField) -> StoreResult<Vec<String>>;

    /// Every record.
    fn all(&self) -> StoreResult<Vec<CatalogRecord>>;

    /// Get the total count of records.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.all()?.len())
    }

    /// Insert a record under `max_id + 1` (or `first_id` when empty).
    ///
    /// The id read and the insert must happen atomically.
    fn insert_next(&mut self, record: NewRecord, first_id: RecordId) -> StoreResult<CatalogRecord>;

    /// Insert a record under an explicit id (seeding only).
    ///
    /// Fails with `StoreError::Integrity` if the id is taken.
    fn insert_with_id(&mut self, record: CatalogRecord) -> StoreResult<()>;

    /// Replace one field of a record.
    ///
    /// Returns `false` if no record has that id.
    fn update_field(&mut self, id: RecordId, update: &FieldUpdate) -> StoreResult<bool>;

    /// Delete a record by id.
    ///
    /// Returns `true` if a record was deleted, `false` if it didn't exist.
    fn delete(&mut self, id: RecordId) -> StoreResult<bool>;
}
