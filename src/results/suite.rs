use crate::results::{cmp_slices, group::TestGroupResult, status::TestExecutionResult};
use serde_derive::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteResult {
    path: String,
    groups: Vec<TestGroupResult>,
}

impl TestSuiteResult {
    pub fn new(path: String, groups: Vec<TestGroupResult>) -> Self {
        Self { path, groups }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn groups(&self) -> &[TestGroupResult] {
        &self.groups
    }

    pub fn tests(&self) -> usize {
        self.groups.iter().map(|g| g.tests().len()).sum()
    }

    pub fn passed(&self) -> usize {
        self.groups.iter().map(TestGroupResult::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.groups.iter().map(TestGroupResult::failed).sum()
    }

    pub fn skipped(&self) -> usize {
        self.groups.iter().map(TestGroupResult::skipped).sum()
    }

    pub fn duration(&self) -> f64 {
        self.groups.iter().map(TestGroupResult::duration).sum()
    }

    pub fn result(&self) -> TestExecutionResult {
        TestExecutionResult::rollup(
            self.groups
                .iter()
                .flat_map(|g| g.tests().iter().map(|t| t.status())),
        )
    }

    pub fn failed_groups(&self) -> impl Iterator<Item = &TestGroupResult> {
        self.groups
            .iter()
            .filter(|g| g.result() == TestExecutionResult::Failed)
    }

    pub fn sort(&mut self) {
        self.groups.iter_mut().for_each(TestGroupResult::sort);
        self.groups.sort_by(TestGroupResult::canonical_cmp);
    }

    /// Expects both suites to be sorted already.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.result()
            .severity()
            .cmp(&other.result().severity())
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| cmp_slices(&self.groups, &other.groups, TestGroupResult::canonical_cmp))
    }
}
