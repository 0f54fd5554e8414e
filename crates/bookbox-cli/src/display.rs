//! Record formatting for the terminal

use bookbox_core::CatalogRecord;

/// Four labeled lines for one record.
pub fn record_block(record: &CatalogRecord) -> String {
    format!(
        "ID:       {}\nTITLE:    {}\nAUTHOR:   {}\nQUANTITY: {}",
        record.id, record.title, record.author, record.quantity
    )
}

/// Blocks for several records, separated by blank lines.
pub fn record_list(records: &[CatalogRecord]) -> String {
    if records.is_empty() {
        return "No books found".to_string();
    }
    records
        .iter()
        .map(record_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbox_core::{NewRecord, RecordId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_block() {
        let record = NewRecord::new("Alice in Wonderland", "Lewis Carroll", 12).with_id(RecordId(3005));
        assert_eq!(
            record_block(&record),
            "ID:       3005\nTITLE:    Alice in Wonderland\nAUTHOR:   Lewis Carroll\nQUANTITY: 12"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(record_list(&[]), "No books found");
    }
}
