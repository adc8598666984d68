//! The local key-value store.

use crate::error::Result;
use crate::storage::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// SQLite-backed key-value store.
///
/// Components borrow this exclusively (`&mut`) for writes, making the
/// single-writer model of the design a compile-time property.
#[derive(Debug)]
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open a store at the given path.
    ///
    /// Creates the database and applies schema if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or
    /// schema application fails.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_schema(&conn)?;
        debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored document does
    /// not deserialize to `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the upsert fails.
    pub fn put_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            rusqlite::params![key, json, chrono::Utc::now().to_rfc3339()],
        )?;
        debug!(key, bytes = json.len(), "wrote key");
        Ok(())
    }

    /// Remove `key`. Returns whether a row existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let removed = self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(removed > 0)
    }
}
