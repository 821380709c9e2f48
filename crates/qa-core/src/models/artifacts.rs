//! Standalone QA documents produced by the generator.
//!
//! Each artifact kind has a typed, forgiving shape used for display. When the
//! model output does not carry the expected top-level key, callers fall back
//! to showing the raw JSON.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Kind of standalone document to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    TestPlan,
    TestCases,
    AcceptanceCriteria,
    BugReport,
    TestNotes,
    Review,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::TestPlan,
        ArtifactKind::TestCases,
        ArtifactKind::AcceptanceCriteria,
        ArtifactKind::BugReport,
        ArtifactKind::TestNotes,
        ArtifactKind::Review,
    ];

    /// Top-level key the model is asked to answer under.
    pub fn root_key(&self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "testPlan",
            ArtifactKind::TestCases => "testCases",
            ArtifactKind::AcceptanceCriteria => "acceptanceCriteria",
            ArtifactKind::BugReport => "bugReport",
            ArtifactKind::TestNotes => "testReport",
            ArtifactKind::Review => "review",
        }
    }

    /// Human-readable generator title.
    pub fn title(&self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "Test Plan Generator",
            ArtifactKind::TestCases => "Test Case Generator",
            ArtifactKind::AcceptanceCriteria => "Acceptance Criteria Generator",
            ArtifactKind::BugReport => "Bug Report Generator",
            ArtifactKind::TestNotes => "Test Notes & Summary Generator",
            ArtifactKind::Review => "QA Review Tool",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "test-plan",
            ArtifactKind::TestCases => "test-cases",
            ArtifactKind::AcceptanceCriteria => "acceptance-criteria",
            ArtifactKind::BugReport => "bug-report",
            ArtifactKind::TestNotes => "test-notes",
            ArtifactKind::Review => "review",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.root_key() == s)
            .ok_or_else(|| format!("Invalid artifact kind: {s}"))
    }
}

/// A decoded artifact with its typed content.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    TestPlan(TestPlan),
    TestCases(Vec<GeneratedTestCase>),
    AcceptanceCriteria(AcceptanceCriteria),
    BugReport(BugReport),
    TestNotes(TestReport),
    Review(Review),
}

impl Artifact {
    /// Extract the typed artifact from parsed model output.
    ///
    /// Returns `None` when the expected top-level key is missing or its
    /// content does not fit the typed shape at all.
    pub fn from_value(kind: ArtifactKind, value: &Value) -> Option<Self> {
        let inner = value.get(kind.root_key())?;
        let artifact = match kind {
            ArtifactKind::TestPlan => Artifact::TestPlan(typed(inner)?),
            ArtifactKind::TestCases => Artifact::TestCases(typed(inner)?),
            ArtifactKind::AcceptanceCriteria => Artifact::AcceptanceCriteria(typed(inner)?),
            ArtifactKind::BugReport => Artifact::BugReport(typed(inner)?),
            ArtifactKind::TestNotes => Artifact::TestNotes(typed(inner)?),
            ArtifactKind::Review => Artifact::Review(typed(inner)?),
        };
        Some(artifact)
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::TestPlan(_) => ArtifactKind::TestPlan,
            Artifact::TestCases(_) => ArtifactKind::TestCases,
            Artifact::AcceptanceCriteria(_) => ArtifactKind::AcceptanceCriteria,
            Artifact::BugReport(_) => ArtifactKind::BugReport,
            Artifact::TestNotes(_) => ArtifactKind::TestNotes,
            Artifact::Review(_) => ArtifactKind::Review,
        }
    }
}

fn typed<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    #[serde(default, deserialize_with = "lenient::text")]
    pub project_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub objective: String,
    #[serde(default)]
    pub scope: PlanScope,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub test_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub test_environments: Vec<String>,
    #[serde(default)]
    pub entry_exit_criteria: EntryExitCriteria,
    #[serde(default)]
    pub testing_phases: Vec<TestingPhase>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanScope {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub in_scope: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub out_of_scope: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryExitCriteria {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub entry: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub exit: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestingPhase {
    #[serde(default, deserialize_with = "lenient::text")]
    pub phase: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Risk {
    #[serde(default, deserialize_with = "lenient::text")]
    pub risk: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mitigation: String,
}

/// A test case as listed by the standalone test case generator, which also
/// reports a test type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTestCase {
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
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub case_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceCriteria {
    #[serde(default, deserialize_with = "lenient::text")]
    pub user_story: String,
    #[serde(default)]
    pub gherkin: Vec<GherkinScenario>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub checklist: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub edge_cases: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub out_of_scope: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GherkinScenario {
    #[serde(default, deserialize_with = "lenient::text")]
    pub scenario: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub given: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub when: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub then: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BugReport {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub environment: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub steps_to_reproduce: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub actual_result: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_result: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub impact: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub possible_cause: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestReport {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub scope: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub metrics: Option<ReportMetrics>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub finding_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub severity: String,
}

/// Counts as reported by the model; kept as text because models mix numbers
/// and numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportMetrics {
    #[serde(default, deserialize_with = "lenient::text")]
    pub tested: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub passed: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub failed: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub blocked: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, deserialize_with = "lenient::number")]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub verdict: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub issues: Vec<ReviewIssue>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewIssue {
    #[serde(default, deserialize_with = "lenient::text")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub suggestion: String,
}
