//! Execution summary report.

use std::fmt;

use crate::models::{ExecutionStats, ExecutionSummary};

/// Markdown view of a generated [`ExecutionSummary`].
///
/// Pass rate and the metrics table come from the session's own statistics,
/// not from the numbers the model echoed back.
pub struct SummaryView<'a> {
    pub summary: &'a ExecutionSummary,
    pub stats: &'a ExecutionStats,
}

impl<'a> SummaryView<'a> {
    pub fn new(summary: &'a ExecutionSummary, stats: &'a ExecutionStats) -> Self {
        Self { summary, stats }
    }
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        let stats = self.stats;

        let title = if s.title.is_empty() {
            "Execution Summary"
        } else {
            &s.title
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;
        writeln!(f, "- **Date**: {}", s.date)?;
        writeln!(f, "- **Feature**: {}", s.feature)?;
        writeln!(f, "- **Verdict**: {} {}", s.tone().icon(), s.verdict)?;
        writeln!(
            f,
            "- **Pass Rate**: {}% ({}/{})",
            stats.pass_rate_percent(),
            stats.pass,
            stats.total
        )?;
        writeln!(f)?;

        writeln!(f, "## Metrics")?;
        writeln!(f)?;
        writeln!(f, "| Total | Pass | Fail | Blocked | Skipped |")?;
        writeln!(f, "|-|-|-|-|-|")?;
        writeln!(
            f,
            "| {} | {} | {} | {} | {} |",
            stats.total, stats.pass, stats.fail, stats.blocked, stats.skipped
        )?;
        writeln!(f)?;

        write_list(f, "Key Findings", "●", &s.key_findings)?;
        write_list(f, "Blockers", "⛔", s.real_blockers())?;
        write_list(f, "Recommendations", "→", &s.recommendations)?;

        writeln!(f, "## Conclusion")?;
        writeln!(f)?;
        writeln!(f, "{}", s.conclusion)
    }
}

/// Writes a titled bullet section; empty lists are skipped entirely.
pub(crate) fn write_list(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    marker: &str,
    items: &[String],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {marker} {item}")?;
    }
    writeln!(f)
}
