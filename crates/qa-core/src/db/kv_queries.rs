//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_entries WHERE key = ?1";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM kv_entries WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the blob stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    /// Stores `value` under `key`, replacing any previous blob.
    pub fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now.to_string()])
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    /// When the blob under `key` was last written, or `None` for a missing
    /// key or an unparseable timestamp.
    pub fn value_updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value timestamp")?;

        Ok(raw.and_then(|s| s.parse::<Timestamp>().ok()))
    }
}
