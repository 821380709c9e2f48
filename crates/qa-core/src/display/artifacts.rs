//! Rendering of standalone QA documents.
//!
//! [`ArtifactView`] picks the richest form available: the typed document when
//! the answer has the expected top-level key, pretty-printed JSON when it
//! does not, and the raw model text when the answer was not JSON at all.

use std::fmt;

use super::summary::write_list;
use crate::{
    generator::DecodedOutput,
    models::{
        artifacts::{
            AcceptanceCriteria, BugReport, GeneratedTestCase, Review, TestPlan, TestReport,
        },
        Artifact, ArtifactKind,
    },
};

/// Display wrapper for one generation result.
pub struct ArtifactView<'a> {
    pub kind: ArtifactKind,
    pub output: &'a DecodedOutput,
}

impl<'a> ArtifactView<'a> {
    pub fn new(kind: ArtifactKind, output: &'a DecodedOutput) -> Self {
        Self { kind, output }
    }
}

impl fmt::Display for ArtifactView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.output {
            DecodedOutput::Parsed(value) => match Artifact::from_value(self.kind, value) {
                Some(artifact) => write!(f, "{artifact}"),
                None => {
                    let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                    writeln!(f, "# {}", self.kind.title())?;
                    writeln!(f)?;
                    writeln!(f, "```json")?;
                    writeln!(f, "{pretty}")?;
                    writeln!(f, "```")
                }
            },
            DecodedOutput::Unparsed { raw, .. } => writeln!(f, "{raw}"),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::TestPlan(plan) => fmt_test_plan(plan, f),
            Artifact::TestCases(cases) => fmt_test_cases(cases, f),
            Artifact::AcceptanceCriteria(criteria) => fmt_acceptance(criteria, f),
            Artifact::BugReport(bug) => fmt_bug_report(bug, f),
            Artifact::TestNotes(report) => fmt_test_report(report, f),
            Artifact::Review(review) => fmt_review(review, f),
        }
    }
}

fn fmt_test_plan(p: &TestPlan, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# {} Test Plan", p.project_name)?;
    writeln!(f)?;
    if !p.objective.is_empty() {
        writeln!(f, "{}", p.objective)?;
        writeln!(f)?;
    }

    write_list(f, "In Scope", "✓", &p.scope.in_scope)?;
    write_list(f, "Out of Scope", "✗", &p.scope.out_of_scope)?;
    write_list(f, "Test Types", "●", &p.test_types)?;
    write_list(f, "Environments", "●", &p.test_environments)?;
    write_list(f, "Entry Criteria", "→", &p.entry_exit_criteria.entry)?;
    write_list(f, "Exit Criteria", "→", &p.entry_exit_criteria.exit)?;

    if !p.testing_phases.is_empty() {
        writeln!(f, "## Phases")?;
        writeln!(f)?;
        writeln!(f, "| Phase | Description | Duration |")?;
        writeln!(f, "|-|-|-|")?;
        for phase in &p.testing_phases {
            writeln!(
                f,
                "| {} | {} | {} |",
                phase.phase, phase.description, phase.duration
            )?;
        }
        writeln!(f)?;
    }

    if !p.risks.is_empty() {
        writeln!(f, "## Risks")?;
        writeln!(f)?;
        for risk in &p.risks {
            writeln!(f, "- ⚠ **{}** → {}", risk.risk, risk.mitigation)?;
        }
        writeln!(f)?;
    }

    write_list(f, "Tools", "●", &p.tools)?;
    write_list(f, "Deliverables", "●", &p.deliverables)
}

fn fmt_test_cases(cases: &[GeneratedTestCase], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Test Cases ({})", cases.len())?;
    writeln!(f)?;
    for tc in cases {
        writeln!(f, "## {} {}", tc.id, tc.title)?;
        writeln!(f)?;
        if tc.case_type.is_empty() {
            writeln!(f, "- **Priority**: {}", tc.priority)?;
        } else {
            writeln!(f, "- **Priority**: {} `{}`", tc.priority, tc.case_type)?;
        }
        writeln!(f, "- **Preconditions**: {}", tc.preconditions)?;
        writeln!(f, "- **Expected**: {}", tc.expected_result)?;
        writeln!(f)?;
        for (i, step) in tc.steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn fmt_acceptance(ac: &AcceptanceCriteria, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# User Story")?;
    writeln!(f)?;
    writeln!(f, "*{}*", ac.user_story)?;
    writeln!(f)?;

    if !ac.gherkin.is_empty() {
        writeln!(f, "## Gherkin Scenarios")?;
        writeln!(f)?;
        for scenario in &ac.gherkin {
            writeln!(f, "### {}", scenario.scenario)?;
            writeln!(f)?;
            writeln!(f, "- **Given** {}", scenario.given)?;
            writeln!(f, "- **When** {}", scenario.when)?;
            writeln!(f, "- **Then** {}", scenario.then)?;
            writeln!(f)?;
        }
    }

    write_list(f, "Checklist", "◻", &ac.checklist)?;
    write_list(f, "Edge Cases", "⚠", &ac.edge_cases)?;
    write_list(f, "Out of Scope", "✗", &ac.out_of_scope)
}

fn fmt_bug_report(b: &BugReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Bug Report {}", b.id)?;
    writeln!(f)?;
    writeln!(f, "## {}", b.title)?;
    writeln!(f)?;
    writeln!(f, "- **Severity**: {}", b.severity.to_uppercase())?;
    writeln!(f, "- **Priority**: {}", b.priority)?;
    writeln!(f, "- **Status**: {}", b.status)?;
    writeln!(f, "- **Environment**: `{}`", b.environment)?;
    writeln!(f, "- **Summary**: {}", b.summary)?;
    writeln!(f)?;

    if !b.steps_to_reproduce.is_empty() {
        writeln!(f, "**Steps to Reproduce**")?;
        writeln!(f)?;
        for (i, step) in b.steps_to_reproduce.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        writeln!(f)?;
    }

    writeln!(f, "- **Actual**: {}", b.actual_result)?;
    writeln!(f, "- **Expected**: {}", b.expected_result)?;
    writeln!(f, "- **Impact**: {}", b.impact)?;
    writeln!(f, "- **Possible Cause**: {}", b.possible_cause)
}

fn fmt_test_report(r: &TestReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# {}", r.title)?;
    writeln!(f)?;
    writeln!(f, "- **Date**: {}", r.date)?;
    writeln!(f, "- **Scope**: {}", r.scope)?;
    writeln!(f, "- **Summary**: {}", r.summary)?;
    writeln!(f)?;

    if let Some(m) = &r.metrics {
        writeln!(f, "## Metrics")?;
        writeln!(f)?;
        writeln!(f, "| Tested | Passed | Failed | Blocked |")?;
        writeln!(f, "|-|-|-|-|")?;
        writeln!(f, "| {} | {} | {} | {} |", m.tested, m.passed, m.failed, m.blocked)?;
        writeln!(f)?;
    }

    if !r.findings.is_empty() {
        writeln!(f, "## Findings")?;
        writeln!(f)?;
        for finding in &r.findings {
            writeln!(f, "- ● **{}**: {}", finding.finding_type, finding.description)?;
        }
        writeln!(f)?;
    }

    write_list(f, "Recommendations", "→", &r.recommendations)?;

    writeln!(f, "## Conclusion")?;
    writeln!(f)?;
    writeln!(f, "{}", r.conclusion)
}

fn fmt_review(r: &Review, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Review Result")?;
    writeln!(f)?;
    match r.overall_score {
        Some(score) => writeln!(f, "- **Score**: {score}/10")?,
        None => writeln!(f, "- **Score**: n/a")?,
    }
    writeln!(f, "- **Verdict**: {}", r.verdict)?;
    writeln!(f, "- **Summary**: {}", r.summary)?;
    writeln!(f)?;

    write_list(f, "Strengths", "✓", &r.strengths)?;

    if !r.issues.is_empty() {
        writeln!(f, "## Issues")?;
        writeln!(f)?;
        for issue in &r.issues {
            writeln!(f, "- **[{}]** {}", issue.severity, issue.description)?;
            if !issue.suggestion.is_empty() {
                writeln!(f, "  - 💡 {}", issue.suggestion)?;
            }
        }
        writeln!(f)?;
    }

    write_list(f, "Improvements", "→", &r.improvements)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render(kind: ArtifactKind, output: DecodedOutput) -> String {
        ArtifactView::new(kind, &output).to_string()
    }

    #[test]
    fn test_review_renders_typed() {
        let output = DecodedOutput::Parsed(json!({
            "review": {
                "overallScore": "7",
                "verdict": "Pass",
                "strengths": "Clear steps",
                "issues": [{"severity": "Major", "description": "No negative cases", "suggestion": "Add some"}],
                "summary": "Decent"
            }
        }));
        let rendered = render(ArtifactKind::Review, output);
        assert!(rendered.contains("- **Score**: 7/10"));
        assert!(rendered.contains("- ✓ Clear steps"));
        assert!(rendered.contains("- **[Major]** No negative cases"));
        assert!(rendered.contains("💡 Add some"));
    }

    #[test]
    fn test_bug_report_renders_typed() {
        let output = DecodedOutput::Parsed(json!({
            "bugReport": {
                "id": "BUG-001",
                "title": "Login spinner hangs",
                "severity": "high",
                "stepsToReproduce": ["Open app", "Submit"]
            }
        }));
        let rendered = render(ArtifactKind::BugReport, output);
        assert!(rendered.contains("# Bug Report BUG-001"));
        assert!(rendered.contains("- **Severity**: HIGH"));
        assert!(rendered.contains("1. Open app\n2. Submit\n"));
    }

    #[test]
    fn test_missing_root_key_falls_back_to_json() {
        let output = DecodedOutput::Parsed(json!({"plan": {"name": "x"}}));
        let rendered = render(ArtifactKind::TestPlan, output);
        assert!(rendered.starts_with("# Test Plan Generator\n\n```json\n"));
        assert!(rendered.contains("\"name\": \"x\""));
    }

    #[test]
    fn test_unparsed_shows_raw_text() {
        let output = DecodedOutput::Unparsed {
            reason: "expected value".to_string(),
            raw: "Here is your plan: ...".to_string(),
        };
        assert_eq!(render(ArtifactKind::TestPlan, output), "Here is your plan: ...\n");
    }

    #[test]
    fn test_gherkin_scenarios() {
        let output = DecodedOutput::Parsed(json!({
            "acceptanceCriteria": {
                "userStory": "As a user I want to log in",
                "gherkin": [{"scenario": "Happy path", "given": "an account", "when": "I log in", "then": "I see the dashboard"}],
                "checklist": ["Password is masked"]
            }
        }));
        let rendered = render(ArtifactKind::AcceptanceCriteria, output);
        assert!(rendered.contains("*As a user I want to log in*"));
        assert!(rendered.contains("### Happy path"));
        assert!(rendered.contains("- **When** I log in"));
        assert!(rendered.contains("- ◻ Password is masked"));
        assert!(!rendered.contains("Edge Cases"));
    }
}
