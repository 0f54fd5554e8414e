//! SQLite storage backend implementing CatalogStore trait

use bookbox_core::{
    record::{CatalogRecord, FieldUpdate, IdBounds, NewRecord, RecordId, SearchField},
    storage::{CatalogStore, StoreError},
};
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::backend;

type StoreResult<T> = Result<T, StoreError>;

const SELECT_RECORD: &str = "SELECT id, title, author, qty FROM books";

/// SQLite-backed catalog store
///
/// Statements run in autocommit mode unless noted, so every mutation is durable
/// once the call returns. The connection closes when the store is dropped.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory SQLite store (for testing)
    pub fn in_memory() -> crate::error::Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Create a new file-backed SQLite store
    pub fn open(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        crate::migrate::migrate(&conn)?;
        info!(path = %path.display(), "opened catalog database");
        Ok(Self::new(conn))
    }

    /// Load `records` if the catalog has no rows yet.
    ///
    /// All-or-nothing in one transaction. Returns the number of rows inserted,
    /// zero when the catalog already had data.
    pub fn seed_if_empty(&mut self, records: &[CatalogRecord]) -> crate::error::Result<usize> {
        let tx = self.conn.transaction()?;

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(0);
        }

        {
            let mut stmt =
                tx.prepare("INSERT INTO books (id, title, author, qty) VALUES (?, ?, ?, ?)")?;
            for record in records {
                stmt.execute(rusqlite::params![
                    record.id.0,
                    record.title,
                    record.author,
                    record.quantity,
                ])?;
            }
        }
        tx.commit()?;

        debug!(count = records.len(), "seeded catalog");
        Ok(records.len())
    }

    fn query_records(&self, sql: &str, params: impl rusqlite::Params) -> StoreResult<Vec<CatalogRecord>> {
        let mut stmt = self.conn.prepare(sql).map_err(backend)?;
        let rows = stmt
            .query_map(params, read_row)
            .map_err(backend)?
            .collect::<Result<Vec<RawRow>, rusqlite::Error>>()
            .map_err(backend)?;

        rows.into_iter().map(RawRow::into_record).collect()
    }
}

/// Row as stored, before domain validation
struct RawRow {
    id: i64,
    title: String,
    author: String,
    qty: i64,
}

impl RawRow {
    fn into_record(self) -> StoreResult<CatalogRecord> {
        let quantity = u32::try_from(self.qty).map_err(|_| {
            StoreError::InvalidData(format!("record {} has quantity {}", self.id, self.qty))
        })?;
        Ok(CatalogRecord {
            id: RecordId(self.id),
            title: self.title,
            author: self.author,
            quantity,
        })
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        qty: row.get(3)?,
    })
}

impl CatalogStore for SqliteStore {
    fn id_bounds(&self) -> StoreResult<Option<IdBounds>> {
        let (min, max): (Option<i64>, Option<i64>) = self
            .conn
            .query_row("SELECT MIN(id), MAX(id) FROM books", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(backend)?;

        Ok(min.zip(max).map(|(min, max)| IdBounds::new(min, max)))
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<CatalogRecord>> {
        let raw = self
            .conn
            .query_row(&format!("{} WHERE id = ?", SELECT_RECORD), [id.0], read_row)
            .optional()
            .map_err(backend)?;

        raw.map(RawRow::into_record).transpose()
    }

    fn exists(&self, id: RecordId) -> StoreResult<bool> {
        self.conn
            .prepare("SELECT 1 FROM books WHERE id = ?")
            .and_then(|mut stmt| stmt.exists([id.0]))
            .map_err(backend)
    }

    fn find_exact(&self, field: SearchField, value: &str) -> StoreResult<Vec<CatalogRecord>> {
        let sql = format!("{} WHERE {} = ? ORDER BY id", SELECT_RECORD, field.column());
        self.query_records(&sql, [value])
    }

    fn list_values(&self, field: SearchField) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM books ORDER BY id", field.column()))
            .map_err(backend)?;

        let values = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(backend)?
            .collect::<Result<Vec<String>, rusqlite::Error>>()
            .map_err(backend)?;

        Ok(values)
    }

    fn all(&self) -> StoreResult<Vec<CatalogRecord>> {
        self.query_records(&format!("{} ORDER BY id", SELECT_RECORD), [])
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .map_err(backend)?;
        Ok(count as usize)
    }

    fn insert_next(&mut self, record: NewRecord, first_id: RecordId) -> StoreResult<CatalogRecord> {
        // Max id read and insert share one transaction
        let tx = self.conn.transaction().map_err(backend)?;

        let max: Option<i64> = tx
            .query_row("SELECT MAX(id) FROM books", [], |row| row.get(0))
            .map_err(backend)?;
        let id = max.map(|max| RecordId(max).next()).unwrap_or(first_id);

        tx.execute(
            "INSERT INTO books (id, title, author, qty) VALUES (?, ?, ?, ?)",
            rusqlite::params![id.0, record.title, record.author, record.quantity],
        )
        .map_err(backend)?;
        tx.commit().map_err(backend)?;

        Ok(record.with_id(id))
    }

    fn insert_with_id(&mut self, record: CatalogRecord) -> StoreResult<()> {
        self.conn
            .execute(
                "INSERT INTO books (id, title, author, qty) VALUES (?, ?, ?, ?)",
                rusqlite::params![record.id.0, record.title, record.author, record.quantity],
            )
            .map_err(backend)?;
        Ok(())
    }

    fn update_field(&mut self, id: RecordId, update: &FieldUpdate) -> StoreResult<bool> {
        let rows_affected = match update {
            FieldUpdate::Title(title) => self
                .conn
                .execute("UPDATE books SET title = ? WHERE id = ?", rusqlite::params![title, id.0]),
            FieldUpdate::Author(author) => self
                .conn
                .execute("UPDATE books SET author = ? WHERE id = ?", rusqlite::params![author, id.0]),
            FieldUpdate::Quantity(quantity) => self
                .conn
                .execute("UPDATE books SET qty = ? WHERE id = ?", rusqlite::params![quantity, id.0]),
        }
        .map_err(backend)?;

        Ok(rows_affected > 0)
    }

    fn delete(&mut self, id: RecordId) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM books WHERE id = ?", [id.0])
            .map_err(backend)?;

        Ok(rows_affected > 0)
    }
}
