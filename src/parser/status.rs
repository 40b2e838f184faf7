use crate::results::TestExecutionResult;

/// Native status vocabulary of one runner.
pub struct StatusTable {
    name: &'static str,
    entries: &'static [(&'static str, TestExecutionResult)],
}

pub const BEHAVE_STATUSES: StatusTable = StatusTable {
    name: "behave-json",
    entries: &[
        ("passed", TestExecutionResult::Success),
        ("success", TestExecutionResult::Success),
        ("failed", TestExecutionResult::Failed),
        ("error", TestExecutionResult::Failed),
        ("untested", TestExecutionResult::Skipped),
        ("skipped", TestExecutionResult::Skipped),
    ],
};

pub const MOCHA_STATUSES: StatusTable = StatusTable {
    name: "mocha-json",
    entries: &[
        ("passes", TestExecutionResult::Success),
        ("failures", TestExecutionResult::Failed),
        ("pending", TestExecutionResult::Skipped),
    ],
};

impl StatusTable {
    pub fn lookup(&self, status: &str) -> Option<TestExecutionResult> {
        self.entries
            .iter()
            .find(|(native, _)| native.eq_ignore_ascii_case(status.trim()))
            .map(|(_, result)| *result)
    }

    /// Unknown or missing statuses count as skipped: never claim a success
    /// that was not reported.
    pub fn classify(&self, status: Option<&str>) -> TestExecutionResult {
        match status {
            Some(status) => self.lookup(status).unwrap_or_else(|| {
                warn!(
                    "Unclassified {} status '{}', treating as skipped",
                    self.name, status
                );
                TestExecutionResult::Skipped
            }),
            None => TestExecutionResult::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::TestExecutionResult::*;

    #[test]
    fn test_behave_vocabulary() {
        assert_eq!(BEHAVE_STATUSES.classify(Some("passed")), Success);
        assert_eq!(BEHAVE_STATUSES.classify(Some("success")), Success);
        assert_eq!(BEHAVE_STATUSES.classify(Some("failed")), Failed);
        assert_eq!(BEHAVE_STATUSES.classify(Some("error")), Failed);
        assert_eq!(BEHAVE_STATUSES.classify(Some("untested")), Skipped);
        assert_eq!(BEHAVE_STATUSES.classify(Some("skipped")), Skipped);
        assert_eq!(BEHAVE_STATUSES.classify(Some("Passed")), Success);
    }

    #[test]
    fn test_unknown_or_missing_status_is_skipped() {
        assert_eq!(BEHAVE_STATUSES.lookup("undefined"), None);
        assert_eq!(BEHAVE_STATUSES.classify(Some("undefined")), Skipped);
        assert_eq!(BEHAVE_STATUSES.classify(None), Skipped);
        assert_eq!(MOCHA_STATUSES.classify(Some("passed")), Skipped);
    }

    #[test]
    fn test_mocha_buckets() {
        assert_eq!(MOCHA_STATUSES.classify(Some("passes")), Success);
        assert_eq!(MOCHA_STATUSES.classify(Some("failures")), Failed);
        assert_eq!(MOCHA_STATUSES.classify(Some("pending")), Skipped);
    }
}
