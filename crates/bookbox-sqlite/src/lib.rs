//! SQLite storage backend for the Bookbox catalog
//!
//! This crate provides a persistent SQLite implementation of the bookbox-core
//! `CatalogStore` trait.
//!
//! # Features
//!
//! - Embedded, versioned schema migrations
//! - Every mutation committed before returning
//! - In-memory databases for testing
//! - First-run seeding of the default inventory
//!
//! # Example
//!
//! ```rust,no_run
//! use bookbox_core::{seed::default_books, storage::CatalogStore, RecordId};
//! use bookbox_sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::open("ebookstore.db")?;
//! store.seed_if_empty(&default_books())?;
//!
//! let alice = store.get(RecordId(3005))?;
//! assert!(alice.is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod migrate;
pub mod store;

// Re-export main types
pub use error::{Result, SqliteError};
pub use store::SqliteStore;
