//! Core library for the QA assistant.
//!
//! The heart of the crate is the [`ExecutionSession`]: a feature name plus an
//! ordered list of test cases, each carrying an execution status, free-text
//! notes and a display expansion flag. Every mutation is persisted through a
//! [`SessionStore`], so a session survives restarts.
//!
//! Around it sit:
//!
//! - [`generator`]: prompts a remote language model for test cases,
//!   execution summaries and standalone QA documents
//! - [`display`]: Markdown rendering of sessions, summaries and documents
//! - [`store`] and [`db`]: the in-memory and SQLite-backed stores
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] in [`display::models`];
//! wrappers such as [`SessionView`] and [`UpdateResult`] add context. The CLI
//! renders the resulting Markdown with termimad.
//!
//! # Quick Start
//!
//! ```rust
//! use qa_core::{
//!     display::SessionView,
//!     models::{TestCaseInput, TestStatus},
//!     ExecutionSession, StoreBuilder,
//! };
//!
//! # fn example() -> qa_core::Result<()> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("qa.db");
//! let store = StoreBuilder::new().with_database_path(Some(&path)).build()?;
//! let mut session = ExecutionSession::load(store);
//!
//! session.initialize(
//!     "Login",
//!     vec![TestCaseInput {
//!         id: "TC-001".to_string(),
//!         title: "Valid login".to_string(),
//!         steps: vec!["Open app".to_string(), "Submit".to_string()],
//!         ..TestCaseInput::default()
//!     }],
//! )?;
//! session.set_status("TC-001", TestStatus::Pass)?;
//!
//! println!("{}", SessionView::new(session.snapshot()));
//! assert_eq!(session.progress_percent(), 100);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ArtifactView, CreateResult, DeleteResult, LocalDateTime, OperationStatus, SessionView,
    SummaryView, UpdateResult,
};
pub use error::{QaError, Result};
pub use generator::{
    CompletionClient, CredentialMode, DecodedOutput, Generator, GeneratorConfig,
    HttpCompletionClient,
};
pub use models::{
    Artifact, ArtifactKind, ExecutionStats, ExecutionSummary, SessionSnapshot, Severity,
    TestCase, TestCaseInput, TestStatus,
};
pub use params::{ArtifactRequest, CaseRef, GenerateCases};
pub use session::{ExecutionSession, GenerationToken, SESSION_KEY};
pub use store::{MemoryStore, SessionStore, StoreBuilder};
