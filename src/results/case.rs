use crate::results::status::TestExecutionResult;
use serde_derive::Serialize;
use std::cmp::Ordering;

/// Best-effort description of why a case failed.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    name: String,
    status: TestExecutionResult,
    duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<TestCaseError>,
}

impl TestCaseResult {
    /// Negative or non-finite durations are treated as missing. An error is
    /// only kept on a failed case.
    pub fn new(
        name: String,
        status: TestExecutionResult,
        duration: f64,
        error: Option<TestCaseError>,
    ) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        let error = error.filter(|_| status == TestExecutionResult::Failed);
        Self {
            name,
            status,
            duration,
            error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TestExecutionResult {
        self.status
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn error(&self) -> Option<&TestCaseError> {
        self.error.as_ref()
    }

    /// Total order used by the canonical sort. Only identical cases compare
    /// equal.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.status
            .severity()
            .cmp(&other.status.severity())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| {
                self.duration
                    .partial_cmp(&other.duration)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.error.cmp(&other.error))
    }
}
