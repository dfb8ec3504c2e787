//! SQLite-backed key-value adapter.
//!
//! # Responsibility
//! - Implement the `KvStorage` port over one `kv_records` table, standing in
//!   for the browser local storage the hosted variant used.
//!
//! # Invariants
//! - Connections must come from `db::open_db`/`open_db_in_memory` so the
//!   schema exists; construction verifies the table instead of failing later.

use crate::storage::{KvStorage, StorageError, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Production key-value adapter over a bootstrapped SQLite connection.
#[derive(Debug)]
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection after verifying the backing table exists.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let table: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'kv_records';",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| StorageError::Schema(err.to_string()))?;

        if table.is_none() {
            return Err(StorageError::Schema(
                "missing kv_records table; open the connection through db::open_db".to_string(),
            ));
        }

        Ok(Self { conn })
    }
}

impl KvStorage for SqliteStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                message: err.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_records (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%s', 'now') * 1000)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at;",
                params![key, value],
            )
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: err.to_string(),
            })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_records WHERE key = ?1;", params![key])
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: err.to_string(),
            })?;
        Ok(())
    }
}
