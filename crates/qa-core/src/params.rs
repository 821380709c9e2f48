//! Parameter structures for QA assistant operations
//!
//! This module contains shared parameter structures that interface layers
//! (the CLI today) convert into before calling the core. They carry no
//! framework-specific derives, so the core stays independent of clap.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Session /       │
//! │  (clap derives) │───▶│ (serde only)    │───▶│ Generator       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers define their own argument structs and implement
//! `From<Args>` for the matching core parameter type.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::{ArtifactKind, Severity};

/// Reference to one test case in the current session.
///
/// Positions are the display order and are only meaningful for the session
/// snapshot they were read from; ids stay valid across reloads. Typed input
/// that could be either, such as `"2"`, stays [`CaseRef::Text`] until the
/// session resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseRef {
    /// 0-based position in the session
    Position(usize),
    /// Stable test case identifier
    Id(String),
    /// All-digit user input: an exact id match wins, otherwise it is a
    /// 1-based position
    Text(String),
}

impl From<usize> for CaseRef {
    fn from(index: usize) -> Self {
        CaseRef::Position(index)
    }
}

impl From<&str> for CaseRef {
    fn from(id: &str) -> Self {
        CaseRef::Id(id.to_string())
    }
}

impl From<String> for CaseRef {
    fn from(id: String) -> Self {
        CaseRef::Id(id)
    }
}

impl FromStr for CaseRef {
    type Err = String;

    /// Parse user input. Model-generated ids may be plain numbers, so an
    /// all-digit string is kept as [`CaseRef::Text`]; anything else is an id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Test case reference cannot be empty".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            Ok(CaseRef::Text(s.to_string()))
        } else {
            Ok(CaseRef::Id(s.to_string()))
        }
    }
}

impl fmt::Display for CaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseRef::Position(index) => write!(f, "#{}", index + 1),
            CaseRef::Id(id) | CaseRef::Text(id) => f.write_str(id),
        }
    }
}

/// Parameters for generating a batch of test cases for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCases {
    /// Name of the feature under test (required)
    pub feature: String,
    /// Optional free-text description of the feature
    pub description: Option<String>,
    /// Kind of testing, e.g. "Functional" or "Regression"
    pub test_type: String,
    /// Number of test cases to ask for
    pub count: u32,
}

impl Default for GenerateCases {
    fn default() -> Self {
        Self {
            feature: String::new(),
            description: None,
            test_type: "Functional".to_string(),
            count: 5,
        }
    }
}

/// Parameters for generating a test plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestPlanRequest {
    pub project: String,
    pub scope: String,
    pub test_type: String,
    pub timeline: String,
}

/// Parameters for generating acceptance criteria from a user story.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcceptanceRequest {
    pub story: String,
    pub context: String,
    /// Preferred format, e.g. "Gherkin" or "Checklist"
    pub format: String,
}

/// Parameters for generating a bug report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BugReportRequest {
    pub title: String,
    /// Steps to reproduce, one per line
    pub steps: String,
    pub actual: String,
    pub expected: String,
    pub environment: String,
    pub severity: Severity,
}

/// Parameters for generating test notes or a test report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestNotesRequest {
    /// What was tested
    pub tested: String,
    pub findings: String,
    /// Kind of document, e.g. "Test Summary Report"
    pub note_type: String,
}

/// Parameters for reviewing an existing QA document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Kind of document under review, e.g. "Test Cases"
    pub review_type: String,
    pub content: String,
}

/// One standalone generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ArtifactRequest {
    TestPlan(TestPlanRequest),
    TestCases(GenerateCases),
    AcceptanceCriteria(AcceptanceRequest),
    BugReport(BugReportRequest),
    TestNotes(TestNotesRequest),
    Review(ReviewRequest),
}

impl ArtifactRequest {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactRequest::TestPlan(_) => ArtifactKind::TestPlan,
            ArtifactRequest::TestCases(_) => ArtifactKind::TestCases,
            ArtifactRequest::AcceptanceCriteria(_) => ArtifactKind::AcceptanceCriteria,
            ArtifactRequest::BugReport(_) => ArtifactKind::BugReport,
            ArtifactRequest::TestNotes(_) => ArtifactKind::TestNotes,
            ArtifactRequest::Review(_) => ArtifactKind::Review,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_ref_keeps_digits_as_text() {
        assert_eq!("1".parse::<CaseRef>(), Ok(CaseRef::Text("1".to_string())));
        assert_eq!(" 12 ".parse::<CaseRef>(), Ok(CaseRef::Text("12".to_string())));
        assert_eq!("0".parse::<CaseRef>(), Ok(CaseRef::Text("0".to_string())));
        assert_eq!(CaseRef::Text("7".to_string()).to_string(), "7");
    }

    #[test]
    fn test_case_ref_parses_ids() {
        assert_eq!(
            "TC-001".parse::<CaseRef>(),
            Ok(CaseRef::Id("TC-001".to_string()))
        );
        assert!("  ".parse::<CaseRef>().is_err());
    }

    #[test]
    fn test_case_ref_display_is_one_based() {
        assert_eq!(CaseRef::Position(0).to_string(), "#1");
        assert_eq!(CaseRef::from("TC-003").to_string(), "TC-003");
    }

    #[test]
    fn test_artifact_request_kind() {
        let request = ArtifactRequest::BugReport(BugReportRequest::default());
        assert_eq!(request.kind(), ArtifactKind::BugReport);
    }
}
