use crate::results::{suite::TestSuiteResult, status::TestExecutionResult};

/// One parsed result document.
///
/// The total duration is always the sum of the contained cases; whatever
/// aggregate the runner reported is never trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRunResult {
    path: String,
    suites: Vec<TestSuiteResult>,
    duration: f64,
}

impl TestRunResult {
    pub fn new(path: String, suites: Vec<TestSuiteResult>) -> Self {
        let duration = suites.iter().map(TestSuiteResult::duration).sum();
        Self {
            path,
            suites,
            duration,
        }
    }

    pub fn empty(path: String) -> Self {
        Self::new(path, Vec::new())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn suites(&self) -> &[TestSuiteResult] {
        &self.suites
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn tests(&self) -> usize {
        self.suites.iter().map(TestSuiteResult::tests).sum()
    }

    pub fn passed(&self) -> usize {
        self.suites.iter().map(TestSuiteResult::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.suites.iter().map(TestSuiteResult::failed).sum()
    }

    pub fn skipped(&self) -> usize {
        self.suites.iter().map(TestSuiteResult::skipped).sum()
    }

    pub fn result(&self) -> TestExecutionResult {
        TestExecutionResult::rollup(self.suites.iter().flat_map(|s| {
            s.groups()
                .iter()
                .flat_map(|g| g.tests().iter().map(|t| t.status()))
        }))
    }

    pub fn failed_suites(&self) -> impl Iterator<Item = &TestSuiteResult> {
        self.suites
            .iter()
            .filter(|s| s.result() == TestExecutionResult::Failed)
    }

    /// Canonical ordering of suites, groups and cases: by severity, then by
    /// name, then by content. Entries only tie when they are identical, so the
    /// order the document listed them in never shows.
    pub fn sort(&mut self) {
        self.suites.iter_mut().for_each(TestSuiteResult::sort);
        self.suites.sort_by(TestSuiteResult::canonical_cmp);
    }
}
