//! Execution summary produced by the generator at the end of a session.

use serde::{Deserialize, Serialize};

use super::lenient;

/// How the model judged the execution as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Positive,
    Conditional,
    Negative,
}

impl VerdictTone {
    /// Classify a free-text verdict.
    ///
    /// A verdict mentioning "pass" but not "fail" is positive, otherwise one
    /// mentioning "conditional" is conditional, anything else is negative.
    /// "Conditional Pass" therefore reads as positive.
    pub fn classify(verdict: &str) -> Self {
        let verdict = verdict.to_lowercase();
        if verdict.contains("pass") && !verdict.contains("fail") {
            VerdictTone::Positive
        } else if verdict.contains("conditional") {
            VerdictTone::Conditional
        } else {
            VerdictTone::Negative
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VerdictTone::Positive => "✓",
            VerdictTone::Conditional => "◐",
            VerdictTone::Negative => "✗",
        }
    }
}

/// Summary report for one execution session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub feature: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub verdict: String,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub key_findings: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub blockers: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub recommendations: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub conclusion: String,
}

impl ExecutionSummary {
    pub fn tone(&self) -> VerdictTone {
        VerdictTone::classify(&self.verdict)
    }

    /// Blockers worth listing. A list whose first entry is a "none"
    /// placeholder counts as empty.
    pub fn real_blockers(&self) -> &[String] {
        match self.blockers.first() {
            Some(first) if is_none_placeholder(first) => &[],
            _ => &self.blockers,
        }
    }
}

fn is_none_placeholder(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "none" | "n/a" | "-"
    )
}
