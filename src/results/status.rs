use serde_derive::Serialize;
use std::fmt;

/// Outcome of a single test case, or the rollup of many.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TestExecutionResult {
    Success,
    Failed,
    Skipped,
}

impl TestExecutionResult {
    /// Rank used by the canonical ordering: failures first, successes last.
    pub fn severity(self) -> u8 {
        match self {
            TestExecutionResult::Failed => 0,
            TestExecutionResult::Skipped => 1,
            TestExecutionResult::Success => 2,
        }
    }

    /// Any failure wins. Otherwise a single skipped case keeps the rollup
    /// from claiming success. No cases at all is a success.
    pub fn rollup<I>(results: I) -> Self
    where
        I: IntoIterator<Item = TestExecutionResult>,
    {
        let mut rollup = TestExecutionResult::Success;
        for result in results {
            match result {
                TestExecutionResult::Failed => return TestExecutionResult::Failed,
                TestExecutionResult::Skipped => rollup = TestExecutionResult::Skipped,
                TestExecutionResult::Success => {}
            }
        }
        rollup
    }

    /// Folds a sub-step outcome into a case outcome. Only failures propagate
    /// and nothing ever lifts a case back out of `Failed`.
    pub fn escalate(self, step: TestExecutionResult) -> Self {
        if step == TestExecutionResult::Failed {
            TestExecutionResult::Failed
        } else {
            self
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestExecutionResult::Success => "success",
            TestExecutionResult::Failed => "failed",
            TestExecutionResult::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TestExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
