//! Catalog record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id assigned to the first record of an empty catalog.
pub const FIRST_ID: RecordId = RecordId(3001);

/// Primary key of a catalog record. Always assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// The id following this one.
    pub fn next(self) -> Self {
        RecordId(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub quantity: u32,
}

impl CatalogRecord {
    /// Value of a text field
    pub fn text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }

    /// Apply a single-field replacement in place.
    pub fn apply(&mut self, update: &FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title.clone(),
            FieldUpdate::Author(author) => self.author = author.clone(),
            FieldUpdate::Quantity(quantity) => self.quantity = *quantity,
        }
    }
}

/// Insert payload. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub title: String,
    pub author: String,
    pub quantity: u32,
}

impl NewRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>, quantity: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Attach an id, producing a full record.
    pub fn with_id(self, id: RecordId) -> CatalogRecord {
        CatalogRecord {
            id,
            title: self.title,
            author: self.author,
            quantity: self.quantity,
        }
    }
}

/// Text fields that can be searched by similarity and located by exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Column name in the backing table
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Replacement of exactly one mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Title(String),
    Author(String),
    Quantity(u32),
}

impl FieldUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Title(_) => "title",
            FieldUpdate::Author(_) => "author",
            FieldUpdate::Quantity(_) => "quantity",
        }
    }
}

/// Current extrema of assigned ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdBounds {
    pub min: RecordId,
    pub max: RecordId,
}

impl IdBounds {
    pub fn new(min: impl Into<RecordId>, max: impl Into<RecordId>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Inclusive range check
    pub fn contains(&self, id: RecordId) -> bool {
        self.min <= id && id <= self.max
    }
}
