//! The execution session: one pass of running a batch of test cases.
//!
//! [`ExecutionSession`] owns the canonical [`SessionSnapshot`] and the
//! [`SessionStore`] it persists to. Every successful mutation writes the
//! whole snapshot under [`SESSION_KEY`]; reads of derived statistics are pure.
//!
//! ```text
//! ┌─────────────┐  initialize   ┌──────────────────┐   write blob   ┌──────────────┐
//! │  Generator  │──────────────▶│ ExecutionSession │───────────────▶│ SessionStore │
//! └─────────────┘               └──────────────────┘                └──────────────┘
//!                                 ▲   set_status / set_notes /
//!                                 │   toggle_expanded / clear
//!                               ┌─┴──────┐
//!                               │  CLI   │
//!                               └────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use qa_core::{
//!     models::{TestCaseInput, TestStatus},
//!     session::ExecutionSession,
//!     store::MemoryStore,
//! };
//!
//! # fn example() -> qa_core::Result<()> {
//! let mut session = ExecutionSession::load(MemoryStore::new());
//! session.initialize(
//!     "Login",
//!     vec![TestCaseInput {
//!         id: "TC-001".to_string(),
//!         title: "Valid login".to_string(),
//!         ..TestCaseInput::default()
//!     }],
//! )?;
//!
//! session.set_status(0usize, TestStatus::Fail)?;
//! assert_eq!(session.stats().fail, 1);
//! assert!(session.test_cases()[0].expanded);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::HashSet;

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    error::{QaError, Result},
    models::{ExecutionStats, SessionSnapshot, TestCase, TestCaseInput, TestStatus},
    params::CaseRef,
    store::SessionStore,
};


/// Storage key of the session blob.
pub const SESSION_KEY: &str = "qa_exec_session";

/// Ticket identifying one generation request.
///
/// Only the most recently issued token may apply its result; an older
/// request that resolves late is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationToken(u64);

/// Canonical state of one test execution pass.
pub struct ExecutionSession<S: SessionStore> {
    snapshot: SessionSnapshot,
    store: S,
    issued_generations: u64,
}

impl<S: SessionStore> ExecutionSession<S> {
    /// Restores the session from `store`.
    ///
    /// A missing, unreadable or malformed blob yields the empty session; this
    /// never fails.
    pub fn load(store: S) -> Self {
        let snapshot = match store.read(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionSnapshot>(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Discarding malformed stored session: {e}");
                    SessionSnapshot::default()
                }
            },
            Ok(None) => SessionSnapshot::default(),
            Err(e) => {
                warn!("Failed to read stored session, starting empty: {e}");
                SessionSnapshot::default()
            }
        };

        debug!(
            "Loaded session '{}' with {} test cases",
            snapshot.feature,
            snapshot.test_cases.len()
        );

        Self {
            snapshot,
            store,
            issued_generations: 0,
        }
    }

    pub fn feature(&self) -> &str {
        &self.snapshot.feature
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.snapshot.test_cases
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.test_cases.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back, e.g. to reload from it.
    pub fn into_store(self) -> S {
        self.store
    }

    /// When the session was last persisted, if the store tracks it.
    pub fn last_saved(&self) -> Option<Timestamp> {
        self.store.written_at(SESSION_KEY).ok().flatten()
    }

    /// Looks up one test case.
    pub fn get(&self, case: &CaseRef) -> Result<&TestCase> {
        let index = self.resolve(case)?;
        Ok(&self.snapshot.test_cases[index])
    }

    /// Replaces the feature and all test cases with a fresh batch.
    ///
    /// Each record is normalized to a pending, collapsed test case with empty
    /// notes. Empty or repeated ids are replaced with `TC-NNN` sequence ids
    /// so every id in the session is unique. An empty batch yields an empty
    /// session.
    pub fn initialize(
        &mut self,
        feature: impl Into<String>,
        inputs: Vec<TestCaseInput>,
    ) -> Result<()> {
        let feature = feature.into();
        let test_cases = normalize_cases(inputs);

        debug!(
            "Initializing session '{}' with {} test cases",
            feature,
            test_cases.len()
        );

        self.snapshot = SessionSnapshot {
            feature,
            test_cases,
        };
        self.save()
    }

    /// Records the execution outcome of one test case.
    ///
    /// Any status may follow any other. Entering `fail` or `blocked` also
    /// expands the test case; other statuses leave the flag alone.
    pub fn set_status(&mut self, case: impl Into<CaseRef>, status: TestStatus) -> Result<()> {
        let index = self.resolve(&case.into())?;
        let test_case = &mut self.snapshot.test_cases[index];

        test_case.status = status;
        if status.reveals_details() {
            test_case.expanded = true;
        }

        debug!("Set status of {} to {}", test_case.id, status.as_str());
        self.save()
    }

    /// Overwrites the notes of one test case.
    pub fn set_notes(&mut self, case: impl Into<CaseRef>, text: impl Into<String>) -> Result<()> {
        let index = self.resolve(&case.into())?;
        self.snapshot.test_cases[index].notes = text.into();
        self.save()
    }

    /// Flips whether one test case shows its details. The flag is persisted
    /// so a reload keeps the same view.
    pub fn toggle_expanded(&mut self, case: impl Into<CaseRef>) -> Result<()> {
        let index = self.resolve(&case.into())?;
        let test_case = &mut self.snapshot.test_cases[index];
        test_case.expanded = !test_case.expanded;
        self.save()
    }

    /// Resets to the empty session unconditionally.
    ///
    /// Confirmation belongs to the caller; this never asks.
    pub fn clear(&mut self) -> Result<()> {
        debug!("Clearing session '{}'", self.snapshot.feature);
        self.snapshot = SessionSnapshot::default();
        self.save()
    }

    /// Per-status counts over the current test cases.
    pub fn stats(&self) -> ExecutionStats {
        self.snapshot.stats()
    }

    /// Share of executed test cases in `[0, 1]`; `0` when empty.
    pub fn progress_fraction(&self) -> f64 {
        self.stats().progress_fraction()
    }

    /// Share of executed test cases as a whole percentage.
    pub fn progress_percent(&self) -> u8 {
        self.stats().progress_percent()
    }

    /// Issues a new generation token, invalidating every earlier one.
    pub fn begin_generation(&mut self) -> GenerationToken {
        self.issued_generations += 1;
        GenerationToken(self.issued_generations)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_current(&self, token: GenerationToken) -> bool {
        token.0 == self.issued_generations
    }

    /// Applies a generation result if it belongs to the latest request.
    ///
    /// Returns `Ok(false)` and leaves the session untouched when a newer
    /// request has been started since `token` was issued.
    pub fn apply_generation(
        &mut self,
        token: GenerationToken,
        feature: impl Into<String>,
        inputs: Vec<TestCaseInput>,
    ) -> Result<bool> {
        if !self.is_current(token) {
            warn!(
                "Discarding stale generation result {} (latest is {})",
                token.0, self.issued_generations
            );
            return Ok(false);
        }

        self.initialize(feature, inputs)?;
        Ok(true)
    }

    /// Writes the whole snapshot to the store.
    pub fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.snapshot)?;
        self.store.write(SESSION_KEY, &blob)?;
        debug!("Persisted session ({} bytes)", blob.len());
        Ok(())
    }

    fn resolve(&self, case: &CaseRef) -> Result<usize> {
        let cases = &self.snapshot.test_cases;
        match case {
            CaseRef::Position(index) if *index < cases.len() => Ok(*index),
            CaseRef::Position(index) => Err(QaError::IndexOutOfRange {
                index: *index,
                len: cases.len(),
            }),
            CaseRef::Id(id) => cases
                .iter()
                .position(|tc| tc.id == *id)
                .ok_or_else(|| QaError::TestCaseNotFound { id: id.clone() }),
            CaseRef::Text(text) => {
                if let Some(index) = cases.iter().position(|tc| tc.id == *text) {
                    return Ok(index);
                }
                match text.parse::<usize>() {
                    Ok(0) => Err(QaError::invalid_input("case")
                        .with_reason("Test case positions start at 1")),
                    Ok(position) if position <= cases.len() => Ok(position - 1),
                    Ok(position) => Err(QaError::IndexOutOfRange {
                        index: position - 1,
                        len: cases.len(),
                    }),
                    Err(_) => Err(QaError::TestCaseNotFound { id: text.clone() }),
                }
            }
        }
    }
}

fn normalize_cases(inputs: Vec<TestCaseInput>) -> Vec<TestCase> {
    let mut seen = HashSet::new();
    let mut next_sequence = 1;

    inputs
        .into_iter()
        .map(|mut input| {
            input.id = input.id.trim().to_string();
            if input.id.is_empty() || seen.contains(&input.id) {
                input.id = loop {
                    let candidate = format!("TC-{next_sequence:03}");
                    next_sequence += 1;
                    if !seen.contains(&candidate) {
                        break candidate;
                    }
                };
            }
            seen.insert(input.id.clone());
            TestCase::from_input(input)
        })
        .collect()
}
