//! Error types for SQLite storage backend

use bookbox_core::storage::StoreError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur during SQLite storage operations
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection or query error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Convert SqliteError to StoreError for the storage trait
impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Database(e) => backend(e),
            SqliteError::Migration(msg) => StoreError::Backend(format!("Migration: {}", msg)),
        }
    }
}

/// Map a rusqlite error onto the storage taxonomy; constraint failures become
/// `Integrity`, everything else `Backend`.
pub(crate) fn backend(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::Integrity(err.to_string())
        }
        other => StoreError::Backend(format!("SQLite: {}", other)),
    }
}
