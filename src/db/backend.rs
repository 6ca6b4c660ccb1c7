//! Key-value persistence backends.
//!
//! The store works against the `Backend` trait rather than SQLite directly,
//! so tests can swap in `MemoryBackend` without touching the filesystem.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::Path;

/// A durable string-keyed store. Writes replace the whole value for a key.
pub trait Backend {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Record a diagnostic row, when the backend supports it.
    fn note(&mut self, action: &str, message: &str) -> AppResult<()> {
        let _ = (action, message);
        Ok(())
    }
}

/// SQLite-backed key-value store (one row per key in the `kv` table).
pub struct SqliteBackend {
    pub conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        crate::db::initialize::init_store(&conn)?;
        Ok(Self { conn })
    }
}

impl Backend for SqliteBackend {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn note(&mut self, action: &str, message: &str) -> AppResult<()> {
        crate::db::audit::audit(&self.conn, action, message)
    }
}

/// In-memory backend used as a test double.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_read_write() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);

        backend.write("k", "v1").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("v1".to_string()));

        // writes replace, never append
        backend.write("k", "v2").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn sqlite_backend_upserts() {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::initialize::init_store(&conn).unwrap();
        let mut backend = SqliteBackend { conn };

        assert_eq!(backend.read("events").unwrap(), None);
        backend.write("events", "[]").unwrap();
        backend.write("events", "[1]").unwrap();
        assert_eq!(backend.read("events").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn sqlite_backend_notes_are_recorded() {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::initialize::init_store(&conn).unwrap();
        let mut backend = SqliteBackend { conn };

        backend.note("load", "discarded corrupt data").unwrap();
        let rows = crate::db::audit::load_audit(&backend.conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].2.contains("corrupt"));
    }
}
