//! Key-value blob store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide whole-blob get/set keyed by string over `kv_blobs`.
//!
//! # Invariants
//! - `set` replaces the full value for the key; there is no partial write.
//! - `get` of an unknown key is `Ok(None)`, never an error.

use crate::db::DbResult;
use rusqlite::{params, Connection};

/// String-keyed blob storage facility.
///
/// The trait seam lets tests substitute a failing or in-memory store for the
/// SQLite-backed one.
pub trait KvStore {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: &str) -> DbResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> DbResult<()>;
}

/// SQLite-backed blob store over a migrated connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_blobs WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO kv_blobs (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
