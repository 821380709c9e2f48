//! The persisted shape of an execution session.

use serde::{Deserialize, Serialize};

use super::{ExecutionStats, TestCase};

/// Feature name and test cases, stored together as one blob.
///
/// Missing fields deserialize to the empty form so that older or partial
/// blobs still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub feature: String,

    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    pub fn stats(&self) -> ExecutionStats {
        ExecutionStats::from_cases(&self.test_cases)
    }
}
