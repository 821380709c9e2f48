//! Aggregate execution statistics.

use serde::{Deserialize, Serialize};

use super::{TestCase, TestStatus};

/// Per-status counts over a set of test cases.
///
/// Always computed from the cases themselves; nothing keeps running counters,
/// so the numbers cannot drift from the session contents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionStats {
    pub total: usize,
    pub pending: usize,
    pub pass: usize,
    pub fail: usize,
    pub blocked: usize,
    pub skipped: usize,
}

impl ExecutionStats {
    /// Count the statuses of the given test cases.
    pub fn from_cases(cases: &[TestCase]) -> Self {
        cases.iter().fold(
            Self {
                total: cases.len(),
                ..Self::default()
            },
            |mut stats, case| {
                match case.status {
                    TestStatus::Pending => stats.pending += 1,
                    TestStatus::Pass => stats.pass += 1,
                    TestStatus::Fail => stats.fail += 1,
                    TestStatus::Blocked => stats.blocked += 1,
                    TestStatus::Skipped => stats.skipped += 1,
                }
                stats
            },
        )
    }

    /// Count for a single status.
    pub fn count(&self, status: TestStatus) -> usize {
        match status {
            TestStatus::Pending => self.pending,
            TestStatus::Pass => self.pass,
            TestStatus::Fail => self.fail,
            TestStatus::Blocked => self.blocked,
            TestStatus::Skipped => self.skipped,
        }
    }

    /// Number of test cases with any status other than pending.
    pub fn executed(&self) -> usize {
        self.total - self.pending
    }

    /// Fraction of executed test cases in `[0, 1]`; `0` for an empty set.
    pub fn progress_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.executed() as f64 / self.total as f64
        }
    }

    /// Executed share as a whole percentage, rounded to nearest.
    pub fn progress_percent(&self) -> u8 {
        percent(self.executed(), self.total)
    }

    /// Passed share as a whole percentage, rounded to nearest; `0` for an
    /// empty set.
    pub fn pass_rate_percent(&self) -> u8 {
        percent(self.pass, self.total)
    }
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // part <= total, so the result stays within 0..=100
    ((part as f64 / total as f64) * 100.0).round() as u8
}
