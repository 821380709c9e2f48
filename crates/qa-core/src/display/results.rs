//! Result wrapper types for displaying mutation outcomes.
//!
//! A new batch of test cases is a [`CreateResult`], a change to one test
//! case is an [`UpdateResult`], and clearing the session is a
//! [`DeleteResult`].

use std::fmt;

use super::collections::SessionView;
use crate::models::{SessionSnapshot, TestCase};

/// Outcome of starting a session with a new batch of test cases.
///
/// # Examples
///
/// ```rust
/// use qa_core::{display::CreateResult, models::SessionSnapshot};
///
/// let snapshot = SessionSnapshot {
///     feature: "Login".to_string(),
///     test_cases: vec![],
/// };
///
/// let output = CreateResult::new(snapshot).to_string();
/// assert!(output.contains("Prepared 0 test cases for 'Login'"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SessionSnapshot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Prepared {} test cases for '{}'",
            self.resource.test_cases.len(),
            self.resource.feature
        )?;
        writeln!(f)?;
        write!(f, "{}", SessionView::new(&self.resource))
    }
}

/// Outcome of changing one test case, with the list of changes made.
///
/// # Examples
///
/// ```rust
/// use qa_core::{
///     display::UpdateResult,
///     models::{TestCase, TestCaseInput, TestStatus},
/// };
///
/// let mut case = TestCase::from_input(TestCaseInput {
///     id: "TC-001".to_string(),
///     title: "Valid login".to_string(),
///     ..TestCaseInput::default()
/// });
/// case.status = TestStatus::Fail;
///
/// let result = UpdateResult::with_changes(case, vec!["Status set to fail".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated test case TC-001"));
/// assert!(output.contains("- Status set to fail"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<TestCase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated test case {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of clearing a session; holds the snapshot that was dropped.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SessionSnapshot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resource.feature.is_empty() {
            writeln!(
                f,
                "Cleared session ({} test cases)",
                self.resource.test_cases.len()
            )
        } else {
            writeln!(
                f,
                "Cleared session '{}' ({} test cases)",
                self.resource.feature,
                self.resource.test_cases.len()
            )
        }
    }
}
