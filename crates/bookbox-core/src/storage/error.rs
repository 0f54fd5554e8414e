//! Storage error types

use thiserror::Error;

use crate::record::RecordId;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Record not found
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Invalid record data (e.g. a negative stored quantity)
    #[error("invalid record data: {0}")]
    InvalidData(String),

    /// Storage backend error (database, filesystem, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Constraint violated by the backend
    #[error("integrity error: {0}")]
    Integrity(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
