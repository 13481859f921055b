//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases holding a single `kv` table.
//! - Configure connection pragmas and apply the schema before use.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer schema version is rejected, not coerced.

use super::{BackendError, BackendResult, KvBackend};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL
);";

/// Key-value backend persisting into one SQLite `kv` table.
#[derive(Debug)]
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens a database file and prepares the schema.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> BackendResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match Self::bootstrap(conn) {
            Ok(backend) => {
                info!(
                    "event=storage_open module=storage status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(backend)
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory database and prepares the schema.
    pub fn open_in_memory() -> BackendResult<Self> {
        info!("event=storage_open module=storage status=start mode=memory");
        let conn = Connection::open_in_memory()?;
        let backend = Self::bootstrap(conn)?;
        info!("event=storage_open module=storage status=ok mode=memory");
        Ok(backend)
    }

    fn bootstrap(conn: Connection) -> BackendResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;

        let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if db_version > SCHEMA_VERSION {
            return Err(BackendError::UnsupportedSchemaVersion {
                db_version,
                latest_supported: SCHEMA_VERSION,
            });
        }
        if db_version < SCHEMA_VERSION {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        }

        Ok(Self { conn })
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> BackendResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> BackendResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteBackend;
    use crate::storage::{BackendError, KvBackend};

    #[test]
    fn get_unknown_key_is_none() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert!(backend.get("missing").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.set("TodoItems", b"[]").unwrap();
        assert_eq!(
            backend.get("TodoItems").unwrap().as_deref(),
            Some(&b"[]"[..])
        );
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.set("k", b"old").unwrap();
        backend.set("k", b"new").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some(&b"new"[..]));
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.db");
        {
            let conn = rusqlite::Connection::open(&path).unwrap();
            conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        }
        let err = SqliteBackend::open(&path).unwrap_err();
        assert!(matches!(
            err,
            BackendError::UnsupportedSchemaVersion { db_version: 99, .. }
        ));
    }
}
