//! Test case model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{lenient, Severity, TestStatus};
use crate::params::BugReportRequest;

/// A test case record as produced by the generator, before it joins an
/// execution session.
///
/// Every field is optional on the wire; missing values default to an empty
/// string or an empty step list. Unknown fields (such as `type`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseInput {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub preconditions: String,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub steps: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_result: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String,
}

/// One row of an execution session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Identifier unique within the session
    pub id: String,

    /// Short name of the scenario
    #[serde(default)]
    pub title: String,

    /// State the system must be in before the first step
    #[serde(default)]
    pub preconditions: String,

    /// Ordered steps; the order is significant
    #[serde(default)]
    pub steps: Vec<String>,

    /// Observable outcome that counts as a pass
    #[serde(default)]
    pub expected_result: String,

    /// Free-text classification (High/Medium/Low by convention)
    #[serde(default)]
    pub priority: String,

    /// Execution outcome
    #[serde(default)]
    pub status: TestStatus,

    /// Reporter notes, typically the actual result of a failed run
    #[serde(default)]
    pub notes: String,

    /// Whether the details are shown in the session view
    #[serde(default)]
    pub expanded: bool,
}

impl TestCase {
    /// Normalize a generator record into a fresh, unexecuted test case.
    pub fn from_input(input: TestCaseInput) -> Self {
        Self {
            id: input.id,
            title: input.title,
            preconditions: input.preconditions,
            steps: input.steps,
            expected_result: input.expected_result,
            priority: input.priority,
            status: TestStatus::Pending,
            notes: String::new(),
            expanded: false,
        }
    }

    /// Steps rendered as `1. step` lines.
    pub fn numbered_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect()
    }

    /// Prefill a bug report from this test case.
    ///
    /// The reporter's notes become the actual result; environment and severity
    /// are left for the reporter to fill in.
    pub fn bug_draft(&self) -> BugReportRequest {
        BugReportRequest {
            title: format!("[FAIL] {}", self.title),
            steps: self.numbered_steps().join("\n"),
            actual: self.notes.clone(),
            expected: self.expected_result.clone(),
            environment: String::new(),
            severity: Severity::default(),
        }
    }
}

impl From<TestCaseInput> for TestCase {
    fn from(input: TestCaseInput) -> Self {
        Self::from_input(input)
    }
}
