//! Error type for the bookbox binary.

use bookbox_core::{CatalogError, StoreError};
use bookbox_sqlite::SqliteError;
use thiserror::Error;

/// Failures that end an operator session.
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("database error: {0}")]
    Sqlite(#[from] SqliteError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the CLI Error.
pub type Result<T> = std::result::Result<T, Error>;
