//! Display implementations for domain models.
//!
//! All output is Markdown so the CLI renderer can style it; the same text is
//! readable as plain output when colors are off.

use std::fmt;

use crate::{
    models::{ExecutionStats, Severity, TestCase, TestStatus},
    params::BugReportRequest,
};

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TestCase {
    /// Heading line shared by the list and the detail view.
    pub(crate) fn fmt_header(&self, f: &mut fmt::Formatter<'_>, level: &str) -> fmt::Result {
        writeln!(
            f,
            "{level} {} {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )
    }

    /// Preconditions, steps, expected result, priority and notes.
    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.priority.is_empty() {
            writeln!(f, "- **Priority**: {}", self.priority)?;
        }
        if !self.preconditions.is_empty() {
            writeln!(f, "- **Preconditions**: {}", self.preconditions)?;
        }
        writeln!(f)?;

        if !self.steps.is_empty() {
            writeln!(f, "**Steps**")?;
            writeln!(f)?;
            for step in self.numbered_steps() {
                writeln!(f, "{step}")?;
            }
            writeln!(f)?;
        }

        if !self.expected_result.is_empty() {
            writeln!(f, "**Expected Result**: {}", self.expected_result)?;
            writeln!(f)?;
        }

        if !self.notes.is_empty() {
            writeln!(f, "**Notes**: {}", self.notes)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f, "##")?;
        writeln!(f)?;
        self.fmt_details(f)
    }
}

impl fmt::Display for ExecutionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Total | Pass | Fail | Blocked | Skipped | Pending |")?;
        writeln!(f, "|-|-|-|-|-|-|")?;
        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} |",
            self.total, self.pass, self.fail, self.blocked, self.skipped, self.pending
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Progress**: {}/{} ({}%)",
            self.executed(),
            self.total,
            self.progress_percent()
        )?;
        writeln!(f, "- **Pass Rate**: {}%", self.pass_rate_percent())
    }
}

/// A bug report prefilled from a test case, before generation.
impl fmt::Display for BugReportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Bug Report Draft")?;
        writeln!(f)?;
        writeln!(f, "- **Title**: {}", self.title)?;
        writeln!(f, "- **Severity**: {}", self.severity)?;
        if !self.environment.is_empty() {
            writeln!(f, "- **Environment**: {}", self.environment)?;
        }
        writeln!(f)?;
        if !self.steps.is_empty() {
            writeln!(f, "**Steps**")?;
            writeln!(f)?;
            writeln!(f, "{}", self.steps)?;
            writeln!(f)?;
        }
        writeln!(f, "- **Actual**: {}", self.actual)?;
        writeln!(f, "- **Expected**: {}", self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestCaseInput;

    fn case() -> TestCase {
        TestCase::from_input(TestCaseInput {
            id: "TC-001".to_string(),
            title: "Valid login".to_string(),
            preconditions: "User exists".to_string(),
            steps: vec!["Open app".to_string(), "Submit".to_string()],
            expected_result: "Dashboard shown".to_string(),
            priority: "High".to_string(),
        })
    }

    #[test]
    fn test_case_detail_view() {
        let mut case = case();
        case.status = TestStatus::Fail;
        case.notes = "Spinner never stops".to_string();

        let output = case.to_string();
        assert!(output.starts_with("## TC-001 Valid login (✗ Fail)\n"));
        assert!(output.contains("- **Preconditions**: User exists"));
        assert!(output.contains("1. Open app\n2. Submit\n"));
        assert!(output.contains("**Expected Result**: Dashboard shown"));
        assert!(output.contains("**Notes**: Spinner never stops"));
    }

    #[test]
    fn test_case_without_notes_hides_section() {
        assert!(!case().to_string().contains("Notes"));
    }

    #[test]
    fn test_bug_draft_view() {
        let mut case = case();
        case.notes = "Spinner never stops".to_string();

        let output = case.bug_draft().to_string();
        assert!(output.contains("- **Title**: [FAIL] Valid login"));
        assert!(output.contains("- **Severity**: medium"));
        assert!(output.contains("1. Open app\n2. Submit\n"));
        assert!(output.contains("- **Actual**: Spinner never stops"));
        assert!(!output.contains("Environment"));
    }

    #[test]
    fn test_stats_view() {
        let stats = ExecutionStats {
            total: 3,
            pending: 1,
            pass: 1,
            fail: 1,
            ..ExecutionStats::default()
        };
        let output = stats.to_string();
        assert!(output.contains("| 3 | 1 | 1 | 0 | 0 | 1 |"));
        assert!(output.contains("- **Progress**: 2/3 (67%)"));
        assert!(output.contains("- **Pass Rate**: 33%"));
    }
}
