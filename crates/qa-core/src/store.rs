//! Durable key-value collaborators for the execution session.
//!
//! The session persists itself through the [`SessionStore`] trait so the
//! same model runs against SQLite in the CLI and against a plain map in
//! tests. [`StoreBuilder`] resolves and prepares the on-disk location.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use jiff::Timestamp;

use crate::{
    db::Database,
    error::{QaError, Result},
};

/// A durable string-keyed blob store, the analog of browser local storage.
///
/// Writes overwrite the whole value; last write wins.
pub trait SessionStore {
    /// Reads the blob stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// When the blob under `key` was last written, if the store tracks it.
    fn written_at(&self, _key: &str) -> Result<Option<Timestamp>> {
        Ok(None)
    }
}

impl SessionStore for Database {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.put_value(key, value)
    }

    fn written_at(&self, key: &str) -> Result<Option<Timestamp>> {
        self.value_updated_at(key)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn written_at(&self, key: &str) -> Result<Option<Timestamp>> {
        (**self).written_at(key)
    }
}

/// Volatile store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with one raw entry, e.g. to simulate a previous run.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Number of writes performed since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Builder for opening the SQLite-backed store.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/qa-assistant/qa.db` or
    /// `~/.local/share/qa-assistant/qa.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database, creating parent directories and schema as needed.
    ///
    /// # Errors
    ///
    /// Returns `QaError::FileSystem` if the parent directory cannot be created
    /// Returns `QaError::Database` if database initialization fails
    pub fn build(self) -> Result<Database> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| QaError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        log::debug!("Opening session database at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("qa-assistant")
            .place_data_file("qa.db")
            .map_err(|e| QaError::XdgDirectory(e.to_string()))
    }
}
