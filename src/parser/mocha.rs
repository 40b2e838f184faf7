use crate::configuration::options::ParseOptions;
use crate::parser::{
    assembler::RunAssembler, diagnostic::ErrorExtractor, read_document, status::MOCHA_STATUSES,
    Result, TestParser,
};
use crate::results::{TestCaseResult, TestExecutionResult, TestRunResult};
use crate::utils::json::{array_field, duration_field, str_field};
use crate::utils::path::PathResolver;
use futures::future::{ready, Ready};
use serde_json::Value;

/// Buckets of a mocha `json` reporter document, in the order they are read.
const BUCKETS: &[&str] = &["passes", "failures", "pending"];

/// Mocha `json` reporter output. Suites are test files, groups are the
/// `describe` titles leading up to each test title.
pub struct MochaJsonParser {
    options: ParseOptions,
    resolver: PathResolver,
}

impl MochaJsonParser {
    pub fn new(options: ParseOptions) -> Self {
        let resolver = PathResolver::new(options.work_dir.clone());
        Self { options, resolver }
    }

    fn test_run_result(&mut self, path: &str, mocha: &Value) -> TestRunResult {
        if BUCKETS.iter().all(|bucket| array_field(mocha, bucket).is_none()) {
            debug!("No mocha tests found in {}", path);
            return TestRunResult::empty(path.to_owned());
        }

        let mut run = RunAssembler::new();
        for bucket in BUCKETS {
            let status = MOCHA_STATUSES.classify(Some(*bucket));
            for test in array_field(mocha, bucket).into_iter().flatten() {
                let file = str_field(test, "file").unwrap_or_default();
                let suite_path = self.resolver.relative(file, &self.options.tracked_files);
                let (group, test) = self.test(test, status);
                run.suite(suite_path).push(group, test);
            }
        }
        run.finish(path)
    }

    fn test(&mut self, test: &Value, status: TestExecutionResult) -> (Option<String>, TestCaseResult) {
        let title = str_field(test, "title").unwrap_or_default();
        let full_title = str_field(test, "fullTitle").unwrap_or(title);

        let error = match test.get("err") {
            Some(err) if self.options.parse_errors && status == TestExecutionResult::Failed => {
                ErrorExtractor::new(&self.options.tracked_files, &mut self.resolver)
                    .from_case(str_field(err, "message"), str_field(err, "stack"))
            }
            _ => None,
        };

        let test = TestCaseResult::new(
            title.to_owned(),
            status,
            duration_field(test, "duration"),
            error,
        );
        (group_name(full_title, title), test)
    }
}

/// `math add adds numbers` with title `adds numbers` belongs to `math add`.
///
/// The prefix is cut by length, so a full title that does not end with the
/// title still yields a group. A cut inside a multi-byte character yields none.
fn group_name(full_title: &str, title: &str) -> Option<String> {
    if full_title == title {
        return None;
    }
    let end = full_title.len().saturating_sub(title.len());
    full_title
        .get(..end)
        .map(|prefix| prefix.trim_end().to_owned())
}

impl TestParser for MochaJsonParser {
    fn parse(&mut self, path: &str, content: &str) -> Ready<Result<TestRunResult>> {
        ready(read_document(path, content).map(|mocha| self.test_run_result(path, &mocha)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::TestExecutionResult::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn parse(tracked_files: &[&str], parse_errors: bool) -> TestRunResult {
        let options = ParseOptions {
            tracked_files: tracked_files.iter().map(|f| f.to_string()).collect(),
            work_dir: None,
            parse_errors,
        };
        let mut parser = MochaJsonParser::new(options);
        block_on(parser.parse(
            "fixtures/mocha-json.json",
            include_str!("../../tests/fixtures/mocha-json.json"),
        ))
        .unwrap()
    }

    #[test]
    fn test_group_name_is_title_prefix() {
        assert_eq!(group_name("math add adds", "adds"), Some("math add".to_owned()));
        assert_eq!(group_name("adds", "adds"), None);
        assert_eq!(group_name("something else", "adds"), Some("something".to_owned()));
        assert_eq!(group_name(" adds", "adds"), Some(String::new()));
        assert_eq!(group_name("ab", "abc"), Some(String::new()));
        assert_eq!(group_name("éx", "xx"), None);
    }

    #[test]
    fn test_document_without_buckets_is_empty() {
        let mut parser = MochaJsonParser::new(ParseOptions::default());
        let result = block_on(parser.parse("a.json", r#"{"stats": {"duration": 10}}"#)).unwrap();
        assert_eq!(result.tests(), 0);
        assert_eq!(result.duration(), 0.0);
        assert_eq!(result.result(), Success);
    }

    #[test]
    fn test_suites_are_files_and_groups_are_describe_blocks() {
        let result = parse(&["test/math.test.js", "test/second.test.js"], true);

        let suites: Vec<_> = result.suites().iter().map(|s| s.path()).collect();
        assert_eq!(suites, vec!["test/math.test.js", "test/second.test.js"]);
        assert_eq!(result.tests(), 5);
        assert_eq!(result.passed(), 3);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.skipped(), 1);
        // stats.duration says 5000.
        assert_eq!(result.duration(), 10.0);

        let math = &result.suites()[0];
        let groups: Vec<_> = math
            .groups()
            .iter()
            .map(|g| (g.name(), g.tests().len(), g.result()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (Some("math subtract"), 1, Failed),
                (Some("math divide"), 1, Skipped),
                (Some("math add"), 2, Success),
            ]
        );

        let second = &result.suites()[1];
        assert_eq!(second.groups()[0].name(), None);
        assert_eq!(second.groups()[0].tests()[0].name(), "top level test");
    }

    #[test]
    fn test_failure_error_points_at_tracked_test_file() {
        let result = parse(&["test/math.test.js"], true);
        let failed = &result.suites()[0].groups()[0].tests()[0];
        let error = failed.error().unwrap();

        assert_eq!(failed.name(), "subtracts");
        assert_eq!(error.message.as_deref(), Some("expected 1 to equal 2"));
        assert_eq!(error.path.as_deref(), Some("test/math.test.js"));
        assert_eq!(error.line, Some(24));
        assert!(error
            .details
            .as_deref()
            .unwrap()
            .starts_with("AssertionError: expected 1 to equal 2"));
    }

    #[test]
    fn test_no_errors_when_disabled() {
        let result = parse(&["test/math.test.js"], false);
        let failed = &result.suites()[0].groups()[0].tests()[0];
        assert_eq!(failed.status(), Failed);
        assert!(failed.error().is_none());
    }
}
