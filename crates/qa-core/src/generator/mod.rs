//! Remote generation of test cases, execution summaries and standalone QA
//! documents.
//!
//! The [`Generator`] builds a prompt, sends it through a [`CompletionClient`]
//! and decodes the answer. It never touches a session directly: callers take
//! a [`GenerationToken`](crate::session::GenerationToken) before awaiting and
//! hand the result to
//! [`ExecutionSession::apply_generation`](crate::session::ExecutionSession::apply_generation).
//!
//! # Examples
//!
//! ```rust,no_run
//! use qa_core::{
//!     generator::{Generator, GeneratorConfig, HttpCompletionClient},
//!     params::GenerateCases,
//!     session::ExecutionSession,
//!     store::MemoryStore,
//! };
//!
//! # async fn example() -> qa_core::Result<()> {
//! let generator = Generator::new(HttpCompletionClient::new(GeneratorConfig::default()));
//! let mut session = ExecutionSession::load(MemoryStore::new());
//!
//! let params = GenerateCases {
//!     feature: "Login".to_string(),
//!     ..GenerateCases::default()
//! };
//! let token = session.begin_generation();
//! let inputs = generator.generate_test_cases(&params).await?;
//! session.apply_generation(token, &params.feature, inputs)?;
//! # Ok(())
//! # }
//! ```

use jiff::Zoned;
use log::{debug, info, warn};
use serde_json::Value;

use crate::{
    error::{QaError, Result},
    models::{ExecutionSummary, TestCaseInput},
    params::{ArtifactRequest, GenerateCases},
    session::ExecutionSession,
    store::SessionStore,
};

pub mod client;
pub mod config;
pub mod decode;
pub mod prompts;

pub use client::{CompletionClient, HttpCompletionClient};
pub use config::{CredentialKind, CredentialMode, GeneratorConfig, GeneratorConfigBuilder};
pub use decode::{decode_model_output, strip_code_fences, DecodedOutput};

use config::{GENERATION_MAX_TOKENS, SUMMARY_MAX_TOKENS};

/// Prompt-level operations on top of a [`CompletionClient`].
pub struct Generator<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> Generator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Asks for a batch of test cases ready for execution.
    ///
    /// # Errors
    ///
    /// Returns `QaError::InvalidInput` for an empty feature or a zero count,
    /// and `QaError::Generation` when the request fails or the answer has no
    /// `testCases` array.
    pub async fn generate_test_cases(&self, params: &GenerateCases) -> Result<Vec<TestCaseInput>> {
        if params.feature.trim().is_empty() {
            return Err(QaError::invalid_input("feature").with_reason("Feature cannot be empty"));
        }
        if params.count == 0 {
            return Err(
                QaError::invalid_input("count").with_reason("At least one test case is required")
            );
        }

        debug!(
            "Generating {} {} test cases for '{}'",
            params.count, params.test_type, params.feature
        );

        let raw = self
            .client
            .complete(&prompts::execution_cases(params), GENERATION_MAX_TOKENS)
            .await?;
        let value = require_json(&raw)?;

        let cases = value
            .get("testCases")
            .filter(|cases| cases.is_array())
            .cloned()
            .ok_or_else(|| QaError::generation("Response has no testCases array"))?;
        let inputs: Vec<TestCaseInput> = serde_json::from_value(cases)
            .map_err(|e| QaError::generation(format!("Malformed testCases entry: {e}")))?;

        info!("Generated {} test cases for '{}'", inputs.len(), params.feature);
        Ok(inputs)
    }

    /// Asks for a summary report of the session's current results.
    ///
    /// # Errors
    ///
    /// Returns `QaError::InvalidInput` when the session has no test cases and
    /// `QaError::Generation` when the answer has no `summary` object.
    pub async fn generate_summary<S: SessionStore>(
        &self,
        session: &ExecutionSession<S>,
    ) -> Result<ExecutionSummary> {
        if session.is_empty() {
            return Err(QaError::invalid_input("session")
                .with_reason("There are no test cases to summarize"));
        }

        let date = Zoned::now().strftime("%Y-%m-%d").to_string();
        let stats = session.stats();
        debug!(
            "Generating summary for '{}' ({} of {} executed)",
            session.feature(),
            stats.executed(),
            stats.total
        );

        let prompt = prompts::execution_summary(session.snapshot(), &stats, &date);
        let raw = self.client.complete(&prompt, SUMMARY_MAX_TOKENS).await?;
        let value = require_json(&raw)?;

        let summary = value
            .get("summary")
            .filter(|summary| summary.is_object())
            .cloned()
            .ok_or_else(|| QaError::generation("Response has no summary object"))?;
        let mut summary: ExecutionSummary = serde_json::from_value(summary)
            .map_err(|e| QaError::generation(format!("Malformed summary: {e}")))?;

        if summary.feature.is_empty() {
            summary.feature = session.feature().to_string();
        }
        if summary.date.is_empty() {
            summary.date = date;
        }
        Ok(summary)
    }

    /// Generates one standalone QA document.
    ///
    /// Output that is not JSON comes back as [`DecodedOutput::Unparsed`] so
    /// the caller can still show the raw text; only transport and API
    /// failures are errors.
    pub async fn generate_artifact(&self, request: &ArtifactRequest) -> Result<DecodedOutput> {
        debug!("Generating {} artifact", request.kind());

        let raw = self
            .client
            .complete(&prompts::artifact(request), GENERATION_MAX_TOKENS)
            .await?;
        let decoded = decode_model_output(&raw);

        if decoded.is_parsed() {
            info!("Generated {}", request.kind());
        } else {
            warn!("Model answer for {} was not JSON", request.kind());
        }
        Ok(decoded)
    }
}

fn require_json(raw: &str) -> Result<Value> {
    match decode_model_output(raw) {
        DecodedOutput::Parsed(value) => Ok(value),
        DecodedOutput::Unparsed { reason, .. } => Err(QaError::generation(format!(
            "Model answer is not valid JSON: {reason}"
        ))),
    }
}
