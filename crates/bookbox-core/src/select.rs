//! Bounds-checked id selection
//!
//! Operator-entered ids are validated against the catalog's current id range
//! before any lookup. The bounds are read on every call, never cached.

use thiserror::Error;

use crate::record::{IdBounds, RecordId};
use crate::storage::{CatalogStore, StoreError};
use crate::validate::is_sentinel;

/// Outcome of a successful selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSelection {
    /// Id within the current bounds. The record may still be gone by lookup time.
    Selected(RecordId),
    /// Operator entered the cancel sentinel
    Cancel,
}

/// Why an id was rejected
#[derive(Debug, Clone, Error)]
pub enum SelectError {
    /// Input is not an integer
    #[error("'{0}' is not a whole number")]
    Parse(String),

    /// Id outside the current range
    #[error("id must be between {min} and {max}")]
    OutOfBounds { min: RecordId, max: RecordId },

    /// The catalog has no records, so no id can be valid
    #[error("the catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SelectError {
    /// Whether the operator should simply be asked again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SelectError::Store(_))
    }
}

/// Validate `raw` against `bounds`.
///
/// The sentinel is checked first, so cancelling works even with no bounds.
pub fn check_id(raw: &str, bounds: Option<IdBounds>) -> Result<IdSelection, SelectError> {
    if is_sentinel(raw) {
        return Ok(IdSelection::Cancel);
    }

    let id = raw
        .trim()
        .parse::<i64>()
        .map(RecordId)
        .map_err(|_| SelectError::Parse(raw.trim().to_string()))?;

    let bounds = bounds.ok_or(SelectError::EmptyCatalog)?;
    if !bounds.contains(id) {
        return Err(SelectError::OutOfBounds {
            min: bounds.min,
            max: bounds.max,
        });
    }

    Ok(IdSelection::Selected(id))
}

/// Validate `raw` against the store's bounds as of this call.
pub fn select_id<S>(store: &S, raw: &str) -> Result<IdSelection, SelectError>
where
    S: CatalogStore + ?Sized,
{
    if is_sentinel(raw) {
        return Ok(IdSelection::Cancel);
    }
    check_id(raw, store.id_bounds()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NewRecord;
    use crate::seed::default_books;
    use crate::storage::MemoryStore;

    fn seeded() -> MemoryStore {
        MemoryStore::with_records(default_books())
    }

    #[test]
    fn test_in_bounds() {
        let store = seeded();
        assert_eq!(
            select_id(&store, "3003").unwrap(),
            IdSelection::Selected(RecordId(3003))
        );
        assert_eq!(
            select_id(&store, " 3001 \n").unwrap(),
            IdSelection::Selected(RecordId(3001))
        );
    }

    #[test]
    fn test_out_of_bounds_carries_bounds() {
        let store = seeded();
        match select_id(&store, "9999") {
            Err(SelectError::OutOfBounds { min, max }) => {
                assert_eq!(min, RecordId(3001));
                assert_eq!(max, RecordId(3005));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_sentinel_cancels() {
        assert_eq!(select_id(&seeded(), "0").unwrap(), IdSelection::Cancel);
        assert_eq!(
            select_id(&MemoryStore::new(), "0").unwrap(),
            IdSelection::Cancel
        );
        assert_eq!(check_id("0", None).unwrap(), IdSelection::Cancel);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            select_id(&seeded(), "abc"),
            Err(SelectError::Parse(ref s)) if s == "abc"
        ));
        assert!(matches!(
            select_id(&seeded(), "30.5"),
            Err(SelectError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(matches!(
            select_id(&MemoryStore::new(), "3001"),
            Err(SelectError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_bounds_refreshed_each_call() {
        let mut store = seeded();
        assert!(select_id(&store, "3006").is_err());

        store
            .insert_next(NewRecord::new("Dune", "Frank Herbert", 1), RecordId(1))
            .unwrap();
        assert_eq!(
            select_id(&store, "3006").unwrap(),
            IdSelection::Selected(RecordId(3006))
        );

        store.delete(RecordId(3001)).unwrap();
        assert!(matches!(
            select_id(&store, "3001"),
            Err(SelectError::OutOfBounds { min: RecordId(3002), .. })
        ));
    }

    #[test]
    fn test_gap_inside_bounds_is_selected() {
        let mut store = seeded();
        store.delete(RecordId(3003)).unwrap();
        // Bounds do not promise existence
        assert_eq!(
            select_id(&store, "3003").unwrap(),
            IdSelection::Selected(RecordId(3003))
        );
        assert!(store.get(RecordId(3003)).unwrap().is_none());
    }

    #[test]
    fn test_recoverable() {
        assert!(SelectError::Parse("x".into()).is_recoverable());
        assert!(!SelectError::Store(StoreError::Backend("down".into())).is_recoverable());
    }
}
