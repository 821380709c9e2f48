//! Prompt templates. Each one ends with the exact JSON shape the answer
//! must take.

use crate::{
    models::{ExecutionStats, SessionSnapshot},
    params::{
        AcceptanceRequest, ArtifactRequest, BugReportRequest, GenerateCases, ReviewRequest,
        TestNotesRequest, TestPlanRequest,
    },
};

const JSON_ONLY: &str = "Reply ONLY with JSON (no markdown):";

pub fn execution_cases(params: &GenerateCases) -> String {
    let description = params
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("not provided");

    format!(
        r#"You are an experienced QA engineer. Create {count} test cases for execution.

Feature: {feature}
Description: {description}
Type: {test_type}

{JSON_ONLY}
{{
  "testCases": [
    {{
      "id": "TC-001",
      "title": "Short test name",
      "preconditions": "Preconditions",
      "steps": ["Step 1", "Step 2", "Step 3"],
      "expectedResult": "Expected result",
      "priority": "High"
    }}
  ]
}}"#,
        count = params.count,
        feature = params.feature,
        test_type = params.test_type,
    )
}

/// One line per test case: `id | title | STATUS[ | Note: notes]`.
pub fn case_lines(snapshot: &SessionSnapshot) -> String {
    snapshot
        .test_cases
        .iter()
        .map(|tc| {
            let mut line = format!(
                "{} | {} | {}",
                tc.id,
                tc.title,
                tc.status.as_str().to_uppercase()
            );
            if !tc.notes.is_empty() {
                line.push_str(" | Note: ");
                line.push_str(&tc.notes);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn execution_summary(snapshot: &SessionSnapshot, stats: &ExecutionStats, date: &str) -> String {
    let feature = &snapshot.feature;
    format!(
        r#"You are a QA engineer. Create a Test Execution Summary report.

Feature: {feature}
Date: {date}
Statistics: Total: {total}, Pass: {pass}, Fail: {fail}, Blocked: {blocked}, Skipped: {skipped}

Test Cases:
{lines}

{JSON_ONLY}
{{
  "summary": {{
    "title": "Execution Summary — {feature}",
    "date": "{date}",
    "feature": "{feature}",
    "metrics": {{ "total": {total}, "pass": {pass}, "fail": {fail}, "blocked": {blocked}, "skipped": {skipped}, "passRate": "%" }},
    "verdict": "Pass / Fail / Conditional Pass",
    "keyFindings": ["Finding 1", "Finding 2"],
    "blockers": ["Blocker 1"],
    "recommendations": ["Recommendation 1"],
    "conclusion": "Final assessment"
  }}
}}"#,
        total = stats.total,
        pass = stats.pass,
        fail = stats.fail,
        blocked = stats.blocked,
        skipped = stats.skipped,
        lines = case_lines(snapshot),
    )
}

pub fn artifact(request: &ArtifactRequest) -> String {
    match request {
        ArtifactRequest::TestPlan(r) => test_plan(r),
        ArtifactRequest::TestCases(r) => test_cases(r),
        ArtifactRequest::AcceptanceCriteria(r) => acceptance(r),
        ArtifactRequest::BugReport(r) => bug_report(r),
        ArtifactRequest::TestNotes(r) => test_notes(r),
        ArtifactRequest::Review(r) => review(r),
    }
}

fn test_plan(r: &TestPlanRequest) -> String {
    format!(
        r#"You are a senior QA engineer. Create a test plan.
Project: {}, Scope: {}, Type: {}, Timeline: {}
{JSON_ONLY}
{{"testPlan":{{"projectName":"name","objective":"objective","scope":{{"inScope":["item"],"outOfScope":["item"]}},"testTypes":["type"],"testEnvironments":["env"],"entryExitCriteria":{{"entry":["criterion"],"exit":["criterion"]}},"testingPhases":[{{"phase":"phase","description":"description","duration":"duration"}}],"risks":[{{"risk":"risk","mitigation":"mitigation"}}],"tools":["tool"],"deliverables":["deliverable"]}}}}"#,
        r.project, r.scope, r.test_type, r.timeline
    )
}

fn test_cases(r: &GenerateCases) -> String {
    format!(
        r#"You are a QA engineer. Create {} test cases. Feature: {}, Description: {}, Type: {}
{JSON_ONLY}
{{"testCases":[{{"id":"TC-001","title":"name","preconditions":"preconditions","steps":["step 1"],"expectedResult":"result","priority":"High","type":"type"}}]}}"#,
        r.count,
        r.feature,
        r.description.as_deref().unwrap_or(""),
        r.test_type
    )
}

fn acceptance(r: &AcceptanceRequest) -> String {
    format!(
        r#"You are a QA expert. Create acceptance criteria. Story: {}, Context: {}, Format: {}
{JSON_ONLY}
{{"acceptanceCriteria":{{"userStory":"story","gherkin":[{{"scenario":"name","given":"given","when":"when","then":"then"}}],"checklist":["criterion"],"edgeCases":["edge case"],"outOfScope":["out of scope"]}}}}"#,
        r.story, r.context, r.format
    )
}

fn bug_report(r: &BugReportRequest) -> String {
    let severity = r.severity.as_str();
    format!(
        r#"You are a QA engineer. Create a bug report. Problem: {}, Steps: {}, Actual: {}, Expected: {}, Environment: {}, Severity: {severity}
{JSON_ONLY}
{{"bugReport":{{"id":"BUG-001","title":"name","summary":"summary","severity":"{severity}","priority":"High","status":"New","environment":"env","stepsToReproduce":["step"],"actualResult":"actual","expectedResult":"expected","impact":"impact","possibleCause":"cause","attachments":"placeholder"}}}}"#,
        r.title, r.steps, r.actual, r.expected, r.environment
    )
}

fn test_notes(r: &TestNotesRequest) -> String {
    format!(
        r#"You are a QA engineer. Create a {}. Tested: {}, Findings: {}
{JSON_ONLY}
{{"testReport":{{"title":"name","date":"date","summary":"summary","scope":"scope","findings":[{{"type":"type","description":"description","severity":"level"}}],"metrics":{{"tested":"5","passed":"4","failed":"1","blocked":"0"}},"recommendations":["recommendation"],"conclusion":"conclusion"}}}}"#,
        r.note_type, r.tested, r.findings
    )
}

fn review(r: &ReviewRequest) -> String {
    format!(
        r#"You are a senior QA reviewer. Perform a review. Type: {}, Content: {}
{JSON_ONLY}
{{"review":{{"overallScore":8,"verdict":"Pass","strengths":["strength"],"issues":[{{"severity":"Major","description":"problem","suggestion":"suggestion"}}],"improvements":["improvement"],"summary":"conclusion"}}}}"#,
        r.review_type, r.content
    )
}
