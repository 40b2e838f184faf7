use crate::configuration::options::ParseOptions;
use crate::parser::{
    assembler::RunAssembler,
    diagnostic::{ErrorExtractor, Step},
    read_document,
    status::BEHAVE_STATUSES,
    Result, TestParser,
};
use crate::results::{TestCaseResult, TestExecutionResult, TestRunResult};
use crate::utils::json::{array_field, duration_field, first_str_field, items, str_field, text_field};
use crate::utils::path::PathResolver;
use futures::future::{ready, Ready};
use serde_json::Value;

/// Behave style JSON: `features[]` holding `scenarios[]` holding `steps[]`.
pub struct BehaveJsonParser {
    options: ParseOptions,
    resolver: PathResolver,
}

impl BehaveJsonParser {
    pub fn new(options: ParseOptions) -> Self {
        let resolver = PathResolver::new(options.work_dir.clone());
        Self { options, resolver }
    }

    fn test_run_result(&mut self, path: &str, behave: &Value) -> TestRunResult {
        let features = match array_field(behave, "features") {
            Some(features) => features,
            None => {
                debug!("No features found in {}", path);
                return TestRunResult::empty(path.to_owned());
            }
        };

        let mut run = RunAssembler::new();
        for feature in features {
            let raw_path = first_str_field(feature, &["filename", "name"]).unwrap_or("Feature");
            let suite_path = self.resolver.relative(raw_path, &self.options.tracked_files);
            debug!("Feature '{}' as suite {}", raw_path, suite_path);

            let suite = run.open_suite(suite_path);
            for scenario in items(feature, "scenarios") {
                let (group, test) = self.scenario(scenario);
                suite.push(group, test);
            }
        }
        run.finish(path)
    }

    fn scenario(&mut self, scenario: &Value) -> (Option<String>, TestCaseResult) {
        let name = str_field(scenario, "name");
        let steps: Vec<Step> = items(scenario, "steps").map(step).collect();

        let status = steps.iter().fold(
            BEHAVE_STATUSES.classify(str_field(scenario, "status")),
            |status, step| status.escalate(step.result),
        );

        let error = if self.options.parse_errors && status == TestExecutionResult::Failed {
            let message = text_field(scenario, "error_message");
            ErrorExtractor::new(&self.options.tracked_files, &mut self.resolver)
                .from_steps(&steps, message.as_deref())
        } else {
            None
        };

        let test = TestCaseResult::new(
            name.unwrap_or("Scenario").to_owned(),
            status,
            duration_field(scenario, "duration"),
            error,
        );
        (name.map(str::to_owned), test)
    }
}

fn step(step: &Value) -> Step {
    let result = step.get("result");
    let status = str_field(step, "status").or_else(|| result.and_then(|r| str_field(r, "status")));

    let text: Vec<String> = vec![
        text_field(step, "text"),
        text_field(step, "error_message"),
        result.and_then(|r| text_field(r, "error_message")),
    ]
    .into_iter()
    .flatten()
    .filter(|t| !t.is_empty())
    .collect();

    Step {
        kind: first_str_field(step, &["step_type", "keyword"])
            .unwrap_or_default()
            .to_owned(),
        name: str_field(step, "name").unwrap_or_default().to_owned(),
        status: status.unwrap_or_default().to_owned(),
        result: BEHAVE_STATUSES.classify(status),
        text: if text.is_empty() {
            None
        } else {
            Some(text.join("\n"))
        },
    }
}

impl TestParser for BehaveJsonParser {
    fn parse(&mut self, path: &str, content: &str) -> Ready<Result<TestRunResult>> {
        ready(read_document(path, content).map(|behave| self.test_run_result(path, &behave)))
    }
}
