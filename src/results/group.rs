use crate::results::{case::TestCaseResult, cmp_slices, status::TestExecutionResult};
use serde_derive::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestGroupResult {
    name: Option<String>,
    tests: Vec<TestCaseResult>,
}

impl TestGroupResult {
    pub fn new(name: Option<String>, tests: Vec<TestCaseResult>) -> Self {
        Self { name, tests }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tests(&self) -> &[TestCaseResult] {
        &self.tests
    }

    pub(crate) fn push(&mut self, test: TestCaseResult) {
        self.tests.push(test);
    }

    pub fn passed(&self) -> usize {
        self.count(TestExecutionResult::Success)
    }

    pub fn failed(&self) -> usize {
        self.count(TestExecutionResult::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(TestExecutionResult::Skipped)
    }

    pub fn result(&self) -> TestExecutionResult {
        TestExecutionResult::rollup(self.tests.iter().map(TestCaseResult::status))
    }

    pub fn duration(&self) -> f64 {
        self.tests.iter().map(TestCaseResult::duration).sum()
    }

    pub fn sort(&mut self) {
        self.tests.sort_by(TestCaseResult::canonical_cmp);
    }

    /// Expects both groups to be sorted already.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.result()
            .severity()
            .cmp(&other.result().severity())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| cmp_slices(&self.tests, &other.tests, TestCaseResult::canonical_cmp))
    }

    fn count(&self, status: TestExecutionResult) -> usize {
        self.tests.iter().filter(|t| t.status() == status).count()
    }
}
