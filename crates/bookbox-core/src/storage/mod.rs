//! Storage abstraction for the catalog
//!
//! This module defines the `CatalogStore` trait that abstracts over different
//! storage backends. Implementations exist for:
//!
//! - **Memory**: In-memory storage for testing (`MemoryStore`)
//! - **SQLite**: Native SQLite via rusqlite (separate crate, `bookbox-sqlite`)
//!
//! # Example
//!
//! ```rust
//! use bookbox_core::storage::{CatalogStore, MemoryStore};
//! use bookbox_core::record::{NewRecord, RecordId, FIRST_ID};
//!
//! let mut store = MemoryStore::new();
//!
//! let record = store
//!     .insert_next(NewRecord::new("Dune", "Frank Herbert", 3), FIRST_ID)
//!     .unwrap();
//! assert_eq!(record.id, RecordId(3001));
//! assert!(store.get(record.id).unwrap().is_some());
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::CatalogStore;
