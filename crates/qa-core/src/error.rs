//! Error types for the QA assistant library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all session, storage and generation
/// operations.
#[derive(Error, Debug)]
pub enum QaError {
    /// A positional reference pointed outside the current session; `index`
    /// is 0-based, the message shows the 1-based position
    #[error("Test case #{} is out of range (session has {len} test cases)", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },
    /// No test case carries the given identifier
    #[error("Test case with ID '{id}' not found")]
    TestCaseNotFound { id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Remote generation failed (transport, API error payload, or unusable
    /// model output)
    #[error("Generation failed: {message}")]
    Generation { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> QaError {
        QaError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> QaError {
        QaError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl QaError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error from any displayable message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Whether this error means the caller referenced a test case that does
    /// not exist in the current session.
    pub fn is_missing_case(&self) -> bool {
        matches!(
            self,
            QaError::IndexOutOfRange { .. } | QaError::TestCaseNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for HTTP transport Results.
pub trait GenerationResultExt<T> {
    /// Map transport errors into a generation error with a message.
    fn generation_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| QaError::database(message).with_source(e))
    }
}

impl<T> GenerationResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn generation_context(self, message: &str) -> Result<T> {
        self.map_err(|e| QaError::generation(format!("{message}: {e}")))
    }
}

/// Result type alias for QA assistant operations
pub type Result<T> = std::result::Result<T, QaError>;
