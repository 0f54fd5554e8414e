//! Catalog service: CRUD mutators and text search over a [`CatalogStore`]

use thiserror::Error;
use tracing::{debug, error};

use crate::record::{CatalogRecord, FieldUpdate, NewRecord, RecordId, SearchField, FIRST_ID};
use crate::resolve::{resolve_scored, ResolveError};
use crate::select::{select_id, IdSelection, SelectError};
use crate::similarity::SimilarityOracle;
use crate::storage::{CatalogStore, StoreError};
use crate::validate::{require_text, ValidationError};

/// Errors from catalog operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no record with id {0}")]
    NotFound(RecordId),

    /// Record still present after a delete. Data-integrity failure, never retried.
    #[error("record {0} is still present after delete; check the database")]
    DeleteVerification(RecordId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Whether the session should surface this as an integrity failure
    pub fn is_fatal(&self) -> bool {
        matches!(self, CatalogError::DeleteVerification(_))
    }
}

/// Result of a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(CatalogRecord),
    /// No record had the id; the catalog is unchanged
    NothingToDelete,
}

/// Result of a text search
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// Candidate value the query resolved to
    pub resolved: String,
    pub score: f64,
    /// Records whose field equals `resolved`
    pub records: Vec<CatalogRecord>,
}

/// The bookstore catalog over some backing store.
///
/// Owns the store for its whole lifetime; dropping the catalog releases it.
pub struct Catalog<S> {
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Validate operator input as a record id (see [`select_id`]).
    pub fn select_id(&self, raw: &str) -> Result<IdSelection, SelectError> {
        select_id(&self.store, raw)
    }

    pub fn find_by_id(&self, id: RecordId) -> Result<Option<CatalogRecord>, CatalogError> {
        Ok(self.store.get(id)?)
    }

    pub fn find_exact(
        &self,
        field: SearchField,
        value: &str,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.store.find_exact(field, value)?)
    }

    pub fn list_values(&self, field: SearchField) -> Result<Vec<String>, CatalogError> {
        Ok(self.store.list_values(field)?)
    }

    pub fn all(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.store.all()?)
    }

    /// Resolve `query` to the closest value of `field`, then fetch exact matches.
    pub fn search_text<O>(
        &self,
        field: SearchField,
        query: &str,
        oracle: &O,
    ) -> Result<TextMatch, CatalogError>
    where
        O: SimilarityOracle + ?Sized,
    {
        let candidates = self.store.list_values(field)?;
        let best = resolve_scored(query, &candidates, oracle)?;
        debug!(%field, query, resolved = best.value, score = best.score, "resolved query");

        let records = self.store.find_exact(field, best.value)?;
        Ok(TextMatch {
            resolved: best.value.to_string(),
            score: best.score,
            records,
        })
    }

    /// Insert a new record under the next id.
    pub fn insert(&mut self, record: NewRecord) -> Result<CatalogRecord, CatalogError> {
        let record = NewRecord {
            title: require_text(&record.title, "title")?,
            author: require_text(&record.author, "author")?,
            quantity: record.quantity,
        };
        let inserted = self.store.insert_next(record, FIRST_ID)?;
        debug!(id = %inserted.id, title = %inserted.title, "inserted record");
        Ok(inserted)
    }

    /// Replace one field of an existing record and return the updated record.
    pub fn update_field(
        &mut self,
        id: RecordId,
        update: FieldUpdate,
    ) -> Result<CatalogRecord, CatalogError> {
        let update = match update {
            FieldUpdate::Title(title) => FieldUpdate::Title(require_text(&title, "title")?),
            FieldUpdate::Author(author) => FieldUpdate::Author(require_text(&author, "author")?),
            quantity @ FieldUpdate::Quantity(_) => quantity,
        };

        if !self.store.update_field(id, &update)? {
            return Err(CatalogError::NotFound(id));
        }
        debug!(%id, field = update.field_name(), "updated record");

        self.store.get(id)?.ok_or(CatalogError::NotFound(id))
    }

    /// Delete a record and verify it is gone.
    pub fn delete(&mut self, id: RecordId) -> Result<DeleteOutcome, CatalogError> {
        let Some(existing) = self.store.get(id)? else {
            return Ok(DeleteOutcome::NothingToDelete);
        };

        self.store.delete(id)?;

        if self.store.exists(id)? {
            error!(%id, "record still present after delete");
            return Err(CatalogError::DeleteVerification(id));
        }
        debug!(%id, "deleted record");
        Ok(DeleteOutcome::Deleted(existing))
    }
}
