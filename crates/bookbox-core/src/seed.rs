//! Default inventory loaded into a fresh catalog

use crate::record::{CatalogRecord, NewRecord, RecordId};

/// The five books every new catalog starts with (ids 3001-3005).
pub fn default_books() -> Vec<CatalogRecord> {
    [
        (3001, "A Tale of Two Cities", "Charles Dickens", 30),
        (3002, "Harry Potter and the Philosopher's Stone", "J.K. Rowling", 40),
        (3003, "The Lion, the Witch and the Wardrobe", "C.S. Lewis", 25),
        (3004, "The Lord of the Rings", "J.R.R. Tolkien", 37),
        (3005, "Alice in Wonderland", "Lewis Carroll", 12),
    ]
    .into_iter()
    .map(|(id, title, author, quantity)| {
        NewRecord::new(title, author, quantity).with_id(RecordId(id))
    })
    .collect()
}
