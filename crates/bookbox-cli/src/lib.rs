//! Bookbox command-line front end
//!
//! Interactive menus for the bookstore catalog: add, update and delete books by
//! id (with confirmation), and search by id, fuzzy title or fuzzy author.
//!
//! Usage:
//!     bookbox --db ebookstore.db
//!     bookbox --in-memory --oracle lexical
//!     bookbox --dump

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod tracing;

pub use config::{AppConfig, Args, Database, OracleKind};
pub use error::{Error, Result};
pub use menu::Session;
pub use prompt::Prompter;
