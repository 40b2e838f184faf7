//! Hands parsed runs over to whatever renders them: canonical JSON plus a
//! one line summary for the log.

use crate::results::{TestExecutionResult, TestRunResult, TestSuiteResult};
use serde_derive::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport<'a> {
    path: &'a str,
    result: TestExecutionResult,
    tests: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
    duration: f64,
    suites: &'a [TestSuiteResult],
}

impl<'a> From<&'a TestRunResult> for RunReport<'a> {
    fn from(run: &'a TestRunResult) -> Self {
        Self {
            path: run.path(),
            result: run.result(),
            tests: run.tests(),
            passed: run.passed(),
            failed: run.failed(),
            skipped: run.skipped(),
            duration: run.duration(),
            suites: run.suites(),
        }
    }
}

pub fn to_json(runs: &[TestRunResult]) -> serde_json::Result<String> {
    let reports: Vec<RunReport> = runs.iter().map(RunReport::from).collect();
    serde_json::to_string_pretty(&reports)
}

pub fn summary(run: &TestRunResult) -> String {
    format!(
        "{}: {} passed, {} failed, {} skipped in {}",
        run.path(),
        run.passed(),
        run.failed(),
        run.skipped(),
        format_duration(run.duration())
    )
}

/// One line per failed case: where it failed, if known, and why.
pub fn failures(run: &TestRunResult) -> Vec<String> {
    let mut lines = Vec::new();
    for suite in run.failed_suites() {
        for group in suite.failed_groups() {
            for test in group
                .tests()
                .iter()
                .filter(|t| t.status() == TestExecutionResult::Failed)
            {
                let error = test.error();
                let location = match error.and_then(|e| e.path.as_deref().zip(e.line)) {
                    Some((path, line)) => format!("{}:{}", path, line),
                    None => suite.path().to_owned(),
                };
                let message = error.and_then(|e| e.message.as_deref()).unwrap_or("failed");
                lines.push(format!("{} {}: {}", location, test.name(), message));
            }
        }
    }
    lines
}

/// Milliseconds in the largest unit that keeps the number readable.
pub fn format_duration(ms: f64) -> String {
    let ms = ms.round() as u64;
    if ms < 1_000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1_000.0)
    } else {
        format!("{}m {}s", ms / 60_000, ms % 60_000 / 1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{TestCaseError, TestCaseResult, TestGroupResult};
    use serde_json::{json, Value};

    fn run() -> TestRunResult {
        TestRunResult::new(
            "results/behave.json".to_owned(),
            vec![TestSuiteResult::new(
                "features/a.feature".to_owned(),
                vec![TestGroupResult::new(
                    Some("Login".to_owned()),
                    vec![
                        TestCaseResult::new(
                            "Login".to_owned(),
                            TestExecutionResult::Failed,
                            1500.0,
                            Some(TestCaseError {
                                message: Some("boom".to_owned()),
                                ..TestCaseError::default()
                            }),
                        ),
                        TestCaseResult::new("Logout".to_owned(), TestExecutionResult::Success, 2.0, None),
                    ],
                )],
            )],
        )
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0ms");
        assert_eq!(format_duration(12.4), "12ms");
        assert_eq!(format_duration(1502.0), "1.5s");
        assert_eq!(format_duration(125_000.0), "2m 5s");
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(&run()),
            "results/behave.json: 1 passed, 1 failed, 0 skipped in 1.5s"
        );
    }

    #[test]
    fn test_failures() {
        assert_eq!(failures(&run()), vec!["features/a.feature Login: boom"]);
        let empty = TestRunResult::empty("empty.json".to_owned());
        assert!(failures(&empty).is_empty());
    }

    #[test]
    fn test_json_handoff() {
        let value: Value = serde_json::from_str(&to_json(&[run()]).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "path": "results/behave.json",
                "result": "failed",
                "tests": 2,
                "passed": 1,
                "failed": 1,
                "skipped": 0,
                "duration": 1502.0,
                "suites": [{
                    "path": "features/a.feature",
                    "groups": [{
                        "name": "Login",
                        "tests": [
                            {
                                "name": "Login",
                                "status": "failed",
                                "duration": 1500.0,
                                "error": {"message": "boom"}
                            },
                            {"name": "Logout", "status": "success", "duration": 2.0}
                        ]
                    }]
                }]
            }])
        );
    }
}
