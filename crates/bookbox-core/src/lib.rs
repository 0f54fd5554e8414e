//! Bookbox Core Engine
//!
//! Domain logic for a small bookstore catalog, free of any terminal or database
//! code:
//!
//! - [`record`]: catalog record types
//! - [`storage`]: the `CatalogStore` trait and an in-memory store
//! - [`similarity`]: similarity oracles (trigram cosine, lexical cascade)
//! - [`resolve`]: best-match resolution of free text against candidates
//! - [`select`]: bounds-checked id selection
//! - [`confirm`]: confirmation state machine for mutations
//! - [`catalog`]: CRUD mutators and text search tying the above together
//!
//! # Example
//!
//! ```rust
//! use bookbox_core::{Catalog, MemoryStore, NgramOracle, SearchField};
//! use bookbox_core::seed::default_books;
//!
//! let catalog = Catalog::new(MemoryStore::with_records(default_books()));
//! let hit = catalog
//!     .search_text(SearchField::Title, "alice wonderland", &NgramOracle)
//!     .unwrap();
//! assert_eq!(hit.resolved, "Alice in Wonderland");
//! assert_eq!(hit.records[0].id.0, 3005);
//! ```

pub mod catalog;
pub mod confirm;
pub mod record;
pub mod resolve;
pub mod seed;
pub mod select;
pub mod similarity;
pub mod storage;
pub mod validate;

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogError, DeleteOutcome, TextMatch};
pub use confirm::{Answer, ConfirmEvent, ConfirmState};
pub use record::{CatalogRecord, FieldUpdate, IdBounds, NewRecord, RecordId, SearchField, FIRST_ID};
pub use resolve::{resolve, resolve_scored, ResolveError, ScoredCandidate};
pub use select::{check_id, select_id, IdSelection, SelectError};
pub use similarity::{LexicalOracle, NgramOracle, SimilarityOracle};
pub use storage::{CatalogStore, MemoryStore, StoreError, StoreResult};
pub use validate::{is_sentinel, parse_quantity, require_text, ValidationError, SENTINEL};
