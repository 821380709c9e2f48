//! Data models for test cases, execution sessions and generated documents.
//!
//! This module contains the domain models of the QA assistant. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! ## Wire shape
//!
//! Models serialize with camelCase field names. The same shape is used for the
//! persisted session blob and for the JSON the language model is asked to
//! produce, so a generated record can be loaded without a mapping layer.
//!
//! Generator-facing models ([`TestCaseInput`], [`ExecutionSummary`] and the
//! [`artifacts`]) deserialize leniently through [`lenient`]: missing fields
//! default to empty values and scalar types are coerced to text.
//!
//! # Examples
//!
//! ```rust
//! use qa_core::models::{TestCase, TestCaseInput, TestStatus};
//!
//! let input: TestCaseInput = serde_json::from_str(
//!     r#"{"id": "TC-001", "title": "Valid login", "steps": ["Open app", "Submit"]}"#,
//! )
//! .unwrap();
//!
//! let case = TestCase::from_input(input);
//! assert_eq!(case.status, TestStatus::Pending);
//! assert!(case.preconditions.is_empty());
//! assert_eq!(case.numbered_steps(), vec!["1. Open app", "2. Submit"]);
//! ```

pub mod artifacts;
pub mod lenient;
pub mod snapshot;
pub mod stats;
pub mod status;
pub mod summary;
pub mod test_case;

#[cfg(test)]
mod tests;

pub use artifacts::{Artifact, ArtifactKind};
pub use snapshot::SessionSnapshot;
pub use stats::ExecutionStats;
pub use status::{Severity, TestStatus};
pub use summary::{ExecutionSummary, VerdictTone};
pub use test_case::{TestCase, TestCaseInput};
