//! The session view: every test case of a session in display order.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDateTime;
use crate::models::{SessionSnapshot, TestCase};

/// Markdown view of a whole session.
///
/// Collapsed test cases show only their heading; expanded ones also show
/// their details. Headings are numbered from 1, matching the positions the
/// CLI accepts.
///
/// # Examples
///
/// ```rust
/// use qa_core::{
///     display::SessionView,
///     models::{SessionSnapshot, TestCase, TestCaseInput},
/// };
///
/// let snapshot = SessionSnapshot {
///     feature: "Login".to_string(),
///     test_cases: vec![TestCase::from_input(TestCaseInput {
///         id: "TC-001".to_string(),
///         title: "Valid login".to_string(),
///         ..TestCaseInput::default()
///     })],
/// };
///
/// let output = SessionView::new(&snapshot).to_string();
/// assert!(output.contains("# Login"));
/// assert!(output.contains("### 1. TC-001 Valid login (—)"));
/// ```
pub struct SessionView<'a> {
    snapshot: &'a SessionSnapshot,
    last_saved: Option<Timestamp>,
}

impl<'a> SessionView<'a> {
    pub fn new(snapshot: &'a SessionSnapshot) -> Self {
        Self {
            snapshot,
            last_saved: None,
        }
    }

    pub fn with_last_saved(mut self, last_saved: Option<Timestamp>) -> Self {
        self.last_saved = last_saved;
        self
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshot.is_empty() {
            return writeln!(
                f,
                "No test cases yet. Generate some with `qa exec generate <feature>` to start an execution."
            );
        }

        let stats = self.snapshot.stats();
        let feature = if self.snapshot.feature.is_empty() {
            "Untitled session"
        } else {
            &self.snapshot.feature
        };

        writeln!(f, "# {feature}")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Progress**: {}/{} ({}%)",
            stats.executed(),
            stats.total,
            stats.progress_percent()
        )?;
        if let Some(saved) = &self.last_saved {
            writeln!(f, "- **Last saved**: {}", LocalDateTime(saved))?;
        }
        writeln!(f)?;

        for (index, case) in self.snapshot.test_cases.iter().enumerate() {
            write!(f, "{}", CaseEntry { position: index + 1, case })?;
        }
        Ok(())
    }
}

/// One numbered entry of the session view.
struct CaseEntry<'a> {
    position: usize,
    case: &'a TestCase,
}

impl fmt::Display for CaseEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.case
            .fmt_header(f, &format!("### {}.", self.position))?;
        writeln!(f)?;
        if self.case.expanded {
            self.case.fmt_details(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestCaseInput, TestStatus};

    fn snapshot() -> SessionSnapshot {
        let cases = ["Valid login", "Wrong password"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                TestCase::from_input(TestCaseInput {
                    id: format!("TC-00{}", i + 1),
                    title: title.to_string(),
                    steps: vec!["Open app".to_string()],
                    expected_result: "Works".to_string(),
                    ..TestCaseInput::default()
                })
            })
            .collect();
        SessionSnapshot {
            feature: "Login".to_string(),
            test_cases: cases,
        }
    }

    #[test]
    fn test_empty_session_shows_hint() {
        let output = SessionView::new(&SessionSnapshot::default()).to_string();
        assert!(output.contains("qa exec generate"));
    }

    #[test]
    fn test_collapsed_cases_show_only_headers() {
        let output = SessionView::new(&snapshot()).to_string();
        assert!(output.contains("- **Progress**: 0/2 (0%)"));
        assert!(output.contains("### 2. TC-002 Wrong password (—)"));
        assert!(!output.contains("Expected Result"));
    }

    #[test]
    fn test_expanded_case_shows_details() {
        let mut snapshot = snapshot();
        snapshot.test_cases[1].status = TestStatus::Blocked;
        snapshot.test_cases[1].expanded = true;

        let output = SessionView::new(&snapshot).to_string();
        assert!(output.contains("### 2. TC-002 Wrong password (⛔ Blocked)"));
        assert_eq!(output.matches("**Expected Result**").count(), 1);
        assert!(output.contains("- **Progress**: 1/2 (50%)"));
    }

    #[test]
    fn test_last_saved_line() {
        let ts: Timestamp = "2025-03-01T12:00:00Z".parse().expect("valid timestamp");
        let snapshot = snapshot();
        let output = SessionView::new(&snapshot)
            .with_last_saved(Some(ts))
            .to_string();
        assert!(output.contains("- **Last saved**: "));
    }
}
