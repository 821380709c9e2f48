//! Display formatting and result wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module add context a bare model does not have, such
//! as list positions, last-saved times or the statistics behind a summary.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │    Markdown     │
//! │ (TestCase, ...) │───▶│    Wrappers     │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is Markdown; the CLI renders it with termimad or prints it
//! as-is when colors are disabled.
//!
//! ## Module Organization
//!
//! - [`collections`]: the session view ([`SessionView`])
//! - [`results`]: mutation outcomes ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`summary`]: execution summary report ([`SummaryView`])
//! - [`artifacts`]: standalone documents with fallbacks ([`ArtifactView`])
//! - [`status`]: one-line feedback ([`OperationStatus`])
//! - [`datetime`]: local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use qa_core::display::OperationStatus;
//!
//! let status = OperationStatus::warning("A newer generation replaced this result");
//! assert_eq!(
//!     status.to_string(),
//!     "Warning: A newer generation replaced this result\n"
//! );
//! ```

pub mod artifacts;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod summary;

pub use artifacts::ArtifactView;
pub use collections::SessionView;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusLevel};
pub use summary::SummaryView;
