//! Command definitions and handlers for the `qa` binary
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `qa_core` never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session / Generator
//! ```
//!
//! [`Cli`] owns the loaded session and the renderer and dispatches each
//! subcommand to the core.

use std::{fs, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::{debug, info};
use qa_core::{
    display::{
        ArtifactView, CreateResult, DeleteResult, OperationStatus, SessionView, SummaryView,
        UpdateResult,
    },
    generator::{decode_model_output, DecodedOutput, GeneratorConfigBuilder},
    models::{Severity, TestCaseInput, TestStatus},
    params::{
        AcceptanceRequest, ArtifactRequest, BugReportRequest, CaseRef, GenerateCases,
        ReviewRequest, TestNotesRequest, TestPlanRequest,
    },
    Database, ExecutionSession, Generator, HttpCompletionClient,
};
use serde_json::Value;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Execution session commands
// ============================================================================

/// Generate test cases for a feature and start a new execution
///
/// The generated batch replaces the current session.
#[derive(Args)]
pub struct GenerateArgs {
    /// Name of the feature under test
    pub feature: String,
    /// Optional description of the feature
    #[arg(short, long, help = "Optional description of the feature under test")]
    pub description: Option<String>,
    /// Kind of testing to generate cases for
    #[arg(short = 't', long, default_value = "Functional")]
    pub test_type: String,
    /// Number of test cases to ask for
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: u32,
}

impl From<GenerateArgs> for GenerateCases {
    fn from(val: GenerateArgs) -> Self {
        GenerateCases {
            feature: val.feature,
            description: val.description,
            test_type: val.test_type,
            count: val.count,
        }
    }
}

/// Start an execution from a JSON file of test cases
///
/// The file holds either a bare array of test cases or an object with a
/// `testCases` array and an optional `feature`.
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the JSON file
    pub file: PathBuf,
    /// Feature name, overriding the one in the file
    #[arg(short, long)]
    pub feature: Option<String>,
}

/// Select one test case by 1-based position or by id
#[derive(Args)]
pub struct CaseArgs {
    /// Position as shown in the listing (1, 2, ...) or a test case id
    #[arg(
        value_parser = CaseRef::from_str,
        help = "1-based position as shown in the listing, or a test case id"
    )]
    pub case: CaseRef,
}

/// Record the outcome of a test case
#[derive(Args)]
pub struct StatusArgs {
    /// Position as shown in the listing (1, 2, ...) or a test case id
    #[arg(value_parser = CaseRef::from_str)]
    pub case: CaseRef,
    /// New execution status
    #[arg(value_enum)]
    pub status: TestStatusArg,
}

/// Replace the notes of a test case
#[derive(Args)]
pub struct NotesArgs {
    /// Position as shown in the listing (1, 2, ...) or a test case id
    #[arg(value_parser = CaseRef::from_str)]
    pub case: CaseRef,
    /// Note text; an empty string clears the notes
    pub text: String,
}

/// Clear the session
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the clear (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

/// Draft a bug report from a test case
///
/// Prints the prefilled draft. With `--generate` the draft is sent to the
/// model and the finished report is shown instead.
#[derive(Args)]
pub struct BugArgs {
    /// Position as shown in the listing (1, 2, ...) or a test case id
    #[arg(value_parser = CaseRef::from_str)]
    pub case: CaseRef,
    /// Environment the failure was seen in
    #[arg(short, long)]
    pub environment: Option<String>,
    /// Severity of the defect
    #[arg(short, long, value_enum)]
    pub severity: Option<SeverityArg>,
    /// Generate the full report instead of printing the draft
    #[arg(short, long)]
    pub generate: bool,
}

#[derive(Subcommand)]
pub enum ExecCommands {
    /// Generate test cases and start a new execution
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Start a new execution from a JSON file
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Show the session with progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one test case in full
    #[command(alias = "s")]
    Show(CaseArgs),
    /// Set the status of a test case
    #[command(alias = "st")]
    Status(StatusArgs),
    /// Replace the notes of a test case
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Show or hide the details of a test case in the listing
    #[command(alias = "t")]
    Toggle(CaseArgs),
    /// Show execution statistics
    Stats,
    /// Generate an execution summary report
    Summary,
    /// Draft a bug report from a test case
    #[command(alias = "b")]
    Bug(BugArgs),
    /// Clear the session
    #[command(aliases = ["c", "rm"])]
    Clear(ClearArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TestStatusArg {
    /// Not executed yet
    Pending,
    /// Met the expected result
    Pass,
    /// Did not meet the expected result
    Fail,
    /// Could not be executed
    Blocked,
    /// Intentionally not executed
    Skipped,
}

impl From<TestStatusArg> for TestStatus {
    fn from(val: TestStatusArg) -> Self {
        match val {
            TestStatusArg::Pending => TestStatus::Pending,
            TestStatusArg::Pass => TestStatus::Pass,
            TestStatusArg::Fail => TestStatus::Fail,
            TestStatusArg::Blocked => TestStatus::Blocked,
            TestStatusArg::Skipped => TestStatus::Skipped,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SeverityArg {
    Critical,
    High,
    Medium,
    Low,
}

impl From<SeverityArg> for Severity {
    fn from(val: SeverityArg) -> Self {
        match val {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::High => Severity::High,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::Low => Severity::Low,
        }
    }
}

// ============================================================================
// Standalone document commands
// ============================================================================

/// Generate a test plan for a project
#[derive(Args)]
pub struct PlanArgs {
    /// Project or release name
    pub project: String,
    /// What is in scope
    #[arg(short, long, default_value = "")]
    pub scope: String,
    /// Kind of testing the plan covers
    #[arg(short = 't', long, default_value = "Functional")]
    pub test_type: String,
    /// Planned timeline
    #[arg(long, default_value = "")]
    pub timeline: String,
}

impl From<PlanArgs> for TestPlanRequest {
    fn from(val: PlanArgs) -> Self {
        TestPlanRequest {
            project: val.project,
            scope: val.scope,
            test_type: val.test_type,
            timeline: val.timeline,
        }
    }
}

/// Generate acceptance criteria for a user story
#[derive(Args)]
pub struct AcceptanceArgs {
    /// The user story
    pub story: String,
    /// Extra context about the product
    #[arg(short, long, default_value = "")]
    pub context: String,
    /// Criteria format, e.g. "Gherkin" or "Checklist"
    #[arg(short, long, default_value = "Gherkin")]
    pub format: String,
}

impl From<AcceptanceArgs> for AcceptanceRequest {
    fn from(val: AcceptanceArgs) -> Self {
        AcceptanceRequest {
            story: val.story,
            context: val.context,
            format: val.format,
        }
    }
}

/// Generate a structured bug report
#[derive(Args)]
pub struct BugReportArgs {
    /// Short description of the defect
    pub title: String,
    /// Steps to reproduce
    #[arg(long, default_value = "")]
    pub steps: String,
    /// What actually happened
    #[arg(short, long, default_value = "")]
    pub actual: String,
    /// What should have happened
    #[arg(short = 'x', long, default_value = "")]
    pub expected: String,
    /// Environment the defect was seen in
    #[arg(short, long, default_value = "")]
    pub environment: String,
    /// Severity of the defect
    #[arg(short, long, value_enum, default_value_t = SeverityArg::Medium)]
    pub severity: SeverityArg,
}

impl From<BugReportArgs> for BugReportRequest {
    fn from(val: BugReportArgs) -> Self {
        BugReportRequest {
            title: val.title,
            steps: val.steps,
            actual: val.actual,
            expected: val.expected,
            environment: val.environment,
            severity: val.severity.into(),
        }
    }
}

/// Generate a test report from testing notes
#[derive(Args)]
pub struct TestNotesArgs {
    /// What was tested
    pub tested: String,
    /// Findings, free text
    #[arg(short, long, default_value = "")]
    pub findings: String,
    /// Kind of report
    #[arg(short = 't', long, default_value = "Test Summary Report")]
    pub note_type: String,
}

impl From<TestNotesArgs> for TestNotesRequest {
    fn from(val: TestNotesArgs) -> Self {
        TestNotesRequest {
            tested: val.tested,
            findings: val.findings,
            note_type: val.note_type,
        }
    }
}

/// Review an existing QA document
///
/// Reads the document from `--file` when given, otherwise from the
/// positional argument.
#[derive(Args)]
pub struct ReviewArgs {
    /// Document text
    #[arg(required_unless_present = "file")]
    pub content: Option<String>,
    /// Read the document from a file
    #[arg(long, conflicts_with = "content")]
    pub file: Option<PathBuf>,
    /// What kind of document is reviewed
    #[arg(short = 't', long, default_value = "Test Cases")]
    pub review_type: String,
}

#[derive(Subcommand)]
pub enum GenCommands {
    /// Generate a test plan
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Generate standalone test cases
    #[command(alias = "c")]
    Cases(GenerateArgs),
    /// Generate acceptance criteria
    #[command(alias = "a")]
    Acceptance(AcceptanceArgs),
    /// Generate a bug report
    #[command(alias = "b")]
    Bug(BugReportArgs),
    /// Generate a test report from notes
    #[command(alias = "n")]
    Notes(TestNotesArgs),
    /// Review a QA document
    #[command(alias = "r")]
    Review(ReviewArgs),
}

// ============================================================================
// Handlers
// ============================================================================

pub struct Cli {
    session: ExecutionSession<Database>,
    renderer: TerminalRenderer,
    generator_config: GeneratorConfigBuilder,
}

impl Cli {
    pub fn new(
        session: ExecutionSession<Database>,
        renderer: TerminalRenderer,
        generator_config: GeneratorConfigBuilder,
    ) -> Self {
        Self {
            session,
            renderer,
            generator_config,
        }
    }

    /// Built on demand so offline commands work without a usable endpoint
    /// configuration.
    fn generator(&self) -> Result<Generator<HttpCompletionClient>> {
        let config = self
            .generator_config
            .clone()
            .build()
            .context("Invalid generator configuration")?;
        let client = HttpCompletionClient::new(config);

        let config = client.config();
        debug!(
            "Using {} at {} ({} credentials)",
            config.model,
            config.endpoint,
            config.credential.name()
        );
        Ok(Generator::new(client))
    }

    pub async fn handle_exec_command(mut self, command: ExecCommands) -> Result<()> {
        match command {
            ExecCommands::Generate(args) => self.generate(args.into()).await,
            ExecCommands::Import(args) => self.import(args),
            ExecCommands::List => self.list(),
            ExecCommands::Show(args) => {
                let case = self.session.get(&args.case)?;
                self.renderer.render(&case.to_string())
            }
            ExecCommands::Status(args) => {
                let status: TestStatus = args.status.into();
                self.session.set_status(args.case.clone(), status)?;
                self.show_update(&args.case, format!("Status set to {}", status.with_icon()))
            }
            ExecCommands::Notes(args) => {
                let change = if args.text.is_empty() {
                    "Notes cleared"
                } else {
                    "Notes updated"
                };
                self.session.set_notes(args.case.clone(), args.text)?;
                self.show_update(&args.case, change.to_string())
            }
            ExecCommands::Toggle(args) => {
                self.session.toggle_expanded(args.case.clone())?;
                let change = if self.session.get(&args.case)?.expanded {
                    "Details shown in the listing"
                } else {
                    "Details hidden in the listing"
                };
                self.show_update(&args.case, change.to_string())
            }
            ExecCommands::Stats => {
                let output = format!("# Execution Statistics\n\n{}", self.session.stats());
                self.renderer.render(&output)
            }
            ExecCommands::Summary => self.summary().await,
            ExecCommands::Bug(args) => self.bug(args).await,
            ExecCommands::Clear(args) => self.clear(args),
        }
    }

    pub async fn handle_gen_command(self, command: GenCommands) -> Result<()> {
        let request = match command {
            GenCommands::Plan(args) => ArtifactRequest::TestPlan(args.into()),
            GenCommands::Cases(args) => ArtifactRequest::TestCases(args.into()),
            GenCommands::Acceptance(args) => ArtifactRequest::AcceptanceCriteria(args.into()),
            GenCommands::Bug(args) => ArtifactRequest::BugReport(args.into()),
            GenCommands::Notes(args) => ArtifactRequest::TestNotes(args.into()),
            GenCommands::Review(args) => {
                let content = match (args.file, args.content) {
                    (Some(path), _) => fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                    (None, Some(content)) => content,
                    (None, None) => bail!("Nothing to review"),
                };
                ArtifactRequest::Review(ReviewRequest {
                    review_type: args.review_type,
                    content,
                })
            }
        };
        self.artifact(&request).await
    }

    /// Shows the session, the default command.
    pub fn list(&self) -> Result<()> {
        let view = SessionView::new(self.session.snapshot()).with_last_saved(self.session.last_saved());
        self.renderer.render(&view.to_string())
    }

    async fn generate(&mut self, params: GenerateCases) -> Result<()> {
        let generator = self.generator()?;
        let token = self.session.begin_generation();

        let inputs = generator
            .generate_test_cases(&params)
            .await
            .context("Failed to generate test cases")?;

        if self
            .session
            .apply_generation(token, params.feature.as_str(), inputs)?
        {
            let result = CreateResult::new(self.session.snapshot().clone());
            self.renderer.render(&result.to_string())
        } else {
            let status = OperationStatus::warning("A newer generation replaced this result");
            self.renderer.render(&status.to_string())
        }
    }

    fn import(&mut self, args: ImportArgs) -> Result<()> {
        let text = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let (file_feature, inputs) = parse_case_file(&text)
            .with_context(|| format!("Failed to import {}", args.file.display()))?;

        let feature = args
            .feature
            .or(file_feature)
            .or_else(|| {
                args.file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        info!("Importing {} test cases from {}", inputs.len(), args.file.display());
        self.session.initialize(feature, inputs)?;

        let result = CreateResult::new(self.session.snapshot().clone());
        self.renderer.render(&result.to_string())
    }

    fn show_update(&self, case: &CaseRef, change: String) -> Result<()> {
        let test_case = self.session.get(case)?.clone();
        let result = UpdateResult::with_changes(test_case, vec![change]);
        self.renderer.render(&result.to_string())
    }

    async fn summary(&self) -> Result<()> {
        let generator = self.generator()?;
        let summary = generator
            .generate_summary(&self.session)
            .await
            .context("Failed to generate summary")?;
        let stats = self.session.stats();
        self.renderer
            .render(&SummaryView::new(&summary, &stats).to_string())
    }

    async fn bug(&self, args: BugArgs) -> Result<()> {
        let mut draft = self.session.get(&args.case)?.bug_draft();
        if let Some(environment) = args.environment {
            draft.environment = environment;
        }
        if let Some(severity) = args.severity {
            draft.severity = severity.into();
        }

        if args.generate {
            self.artifact(&ArtifactRequest::BugReport(draft)).await
        } else {
            self.renderer.render(&draft.to_string())
        }
    }

    fn clear(&mut self, args: ClearArgs) -> Result<()> {
        if !args.confirm {
            bail!("Clearing discards every result in the session; rerun with --confirm");
        }

        let cleared = self.session.snapshot().clone();
        self.session.clear()?;
        self.renderer
            .render(&DeleteResult::new(cleared).to_string())
    }

    async fn artifact(&self, request: &ArtifactRequest) -> Result<()> {
        let generator = self.generator()?;
        let output = generator
            .generate_artifact(request)
            .await
            .with_context(|| format!("Failed to generate {}", request.kind()))?;

        if let DecodedOutput::Unparsed { reason, .. } = &output {
            let status = OperationStatus::warning(format!(
                "The answer was not structured ({reason}); showing it as returned"
            ));
            self.renderer.render(&status.to_string())?;
        }
        self.renderer
            .render(&ArtifactView::new(request.kind(), &output).to_string())
    }
}

/// Reads test cases from a bare JSON array or a `{"feature", "testCases"}`
/// object. Code fences around the JSON are tolerated.
fn parse_case_file(text: &str) -> Result<(Option<String>, Vec<TestCaseInput>)> {
    let value = match decode_model_output(text) {
        DecodedOutput::Parsed(value) => value,
        DecodedOutput::Unparsed { reason, .. } => bail!("File is not valid JSON: {reason}"),
    };

    let (feature, cases) = match value {
        Value::Array(_) => (None, value),
        Value::Object(mut object) => {
            let feature = object
                .get("feature")
                .and_then(Value::as_str)
                .filter(|feature| !feature.trim().is_empty())
                .map(str::to_string);
            match object.remove("testCases") {
                Some(cases @ Value::Array(_)) => (feature, cases),
                _ => bail!("Expected a testCases array"),
            }
        }
        _ => bail!("Expected an array of test cases or an object with testCases"),
    };

    let inputs = serde_json::from_value(cases).context("Malformed test case entry")?;
    Ok((feature, inputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let (feature, inputs) =
            parse_case_file(r#"[{"id": "TC-1", "title": "Login", "steps": "Open app"}]"#)
                .expect("Failed to parse");
        assert_eq!(feature, None);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].steps, vec!["Open app"]);
    }

    #[test]
    fn test_parse_object_with_feature() {
        let text = "```json\n{\"feature\": \"Checkout\", \"testCases\": [{\"title\": \"Pay\"}]}\n```";
        let (feature, inputs) = parse_case_file(text).expect("Failed to parse");
        assert_eq!(feature.as_deref(), Some("Checkout"));
        assert_eq!(inputs[0].title, "Pay");
        assert!(inputs[0].id.is_empty());
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_case_file(r#"{"cases": []}"#).is_err());
        assert!(parse_case_file("42").is_err());
        assert!(parse_case_file("not json").is_err());
    }

    #[test]
    fn test_status_arg_conversion() {
        assert_eq!(TestStatus::from(TestStatusArg::Blocked), TestStatus::Blocked);
        assert_eq!(Severity::from(SeverityArg::Critical), Severity::Critical);
    }

    fn parse_exec(argv: &[&str]) -> ExecCommands {
        use clap::Parser;

        let args = crate::args::Args::try_parse_from(argv.iter().copied())
            .expect("Failed to parse arguments");
        match args.command {
            Some(crate::args::Commands::Exec { command }) => command,
            _ => panic!("Expected an exec command"),
        }
    }

    #[test]
    fn test_case_arguments_go_through_case_ref_parser() {
        match parse_exec(&["qa", "exec", "status", "2", "fail"]) {
            ExecCommands::Status(args) => {
                assert_eq!(args.case, CaseRef::Text("2".to_string()));
                assert!(args.status == TestStatusArg::Fail);
            }
            _ => panic!("Expected the status command"),
        }
        match parse_exec(&["qa", "exec", "show", "TC-001"]) {
            ExecCommands::Show(args) => assert_eq!(args.case, CaseRef::Id("TC-001".to_string())),
            _ => panic!("Expected the show command"),
        }
        match parse_exec(&["qa", "exec", "notes", "1", "flaky"]) {
            ExecCommands::Notes(args) => assert_eq!(args.case, CaseRef::Text("1".to_string())),
            _ => panic!("Expected the notes command"),
        }
        match parse_exec(&["qa", "exec", "bug", "3"]) {
            ExecCommands::Bug(args) => assert_eq!(args.case, CaseRef::Text("3".to_string())),
            _ => panic!("Expected the bug command"),
        }
    }

    #[test]
    fn test_blank_case_argument_is_rejected() {
        use clap::Parser;

        assert!(crate::args::Args::try_parse_from(["qa", "exec", "toggle", " "]).is_err());
    }
}
