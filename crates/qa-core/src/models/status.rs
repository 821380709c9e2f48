//! Status and severity enumerations for test cases and bug reports.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of test case execution statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test case has not been executed yet
    #[default]
    Pending,

    /// Test case ran and met its expected result
    Pass,

    /// Test case ran and did not meet its expected result
    Fail,

    /// Test case could not be executed because of an external obstacle
    Blocked,

    /// Test case was intentionally not executed
    Skipped,
}

impl TestStatus {
    /// Every status, in display order.
    pub const ALL: [TestStatus; 5] = [
        TestStatus::Pending,
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Blocked,
        TestStatus::Skipped,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pending => "pending",
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Blocked => "blocked",
            TestStatus::Skipped => "skipped",
        }
    }

    /// Whether the test case has been executed in any way.
    pub fn is_executed(&self) -> bool {
        !matches!(self, TestStatus::Pending)
    }

    /// Whether entering this status should reveal the test case details.
    ///
    /// Failures and blockers are surfaced immediately so the reporter sees
    /// the notes field and bug report shortcut without an extra toggle.
    pub fn reveals_details(&self) -> bool {
        matches!(self, TestStatus::Fail | TestStatus::Blocked)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qa_core::models::TestStatus;
    ///
    /// assert_eq!(TestStatus::Pass.with_icon(), "✓ Pass");
    /// assert_eq!(TestStatus::Fail.with_icon(), "✗ Fail");
    /// assert_eq!(TestStatus::Pending.with_icon(), "—");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TestStatus::Pending => "—",
            TestStatus::Pass => "✓ Pass",
            TestStatus::Fail => "✗ Fail",
            TestStatus::Blocked => "⛔ Blocked",
            TestStatus::Skipped => "⏭ Skipped",
        }
    }
}

impl FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TestStatus::Pending),
            "pass" | "passed" => Ok(TestStatus::Pass),
            "fail" | "failed" => Ok(TestStatus::Fail),
            "blocked" => Ok(TestStatus::Blocked),
            "skipped" | "skip" => Ok(TestStatus::Skipped),
            _ => Err(format!("Invalid test status: {s}")),
        }
    }
}

/// Severity assigned to a bug report before generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("Invalid severity: {s}")),
        }
    }
}
