use crate::results::{TestCaseError, TestExecutionResult};
use crate::utils::path::PathResolver;
use crate::utils::stack::{exception_source, SourceLocation};

/// One step or assertion of a case, narrowed from the raw document.
#[derive(Debug, Clone)]
pub(crate) struct Step {
    pub kind: String,
    pub name: String,
    pub status: String,
    pub result: TestExecutionResult,
    pub text: Option<String>,
}

impl Step {
    fn transcript(&self) -> String {
        format!("{}: {} [{}]", self.kind, self.name, self.status)
    }
}

/// Builds the error record of a failed case, resolving source locations
/// against the tracked files.
pub(crate) struct ErrorExtractor<'a> {
    tracked_files: &'a [String],
    resolver: &'a mut PathResolver,
}

impl<'a> ErrorExtractor<'a> {
    pub fn new(tracked_files: &'a [String], resolver: &'a mut PathResolver) -> Self {
        Self {
            tracked_files,
            resolver,
        }
    }

    /// The first failing step gives the headline. Details carry its text
    /// followed by the transcript of every step of the case.
    ///
    /// Without a failing step the case's own failure message is used, if any.
    pub fn from_steps(
        &mut self,
        steps: &[Step],
        case_message: Option<&str>,
    ) -> Option<TestCaseError> {
        let failed = match steps
            .iter()
            .find(|s| s.result == TestExecutionResult::Failed)
        {
            Some(step) => step,
            None => return self.from_case(case_message, None),
        };

        let mut details: Vec<String> = Vec::with_capacity(steps.len() + 1);
        if let Some(text) = failed.text.as_deref().filter(|t| !t.is_empty()) {
            details.push(text.to_owned());
        }
        details.extend(steps.iter().map(Step::transcript));

        let location = failed
            .text
            .as_deref()
            .or(case_message)
            .and_then(|text| self.locate(text));

        Some(error(location, Some(failed.name.clone()), Some(details.join("\n"))))
    }

    /// Error from case level diagnostics: a message and an optional stack.
    pub fn from_case(
        &mut self,
        message: Option<&str>,
        stack: Option<&str>,
    ) -> Option<TestCaseError> {
        if message.is_none() && stack.is_none() {
            return None;
        }
        let location = stack.or(message).and_then(|text| self.locate(text));
        Some(error(
            location,
            message.map(str::to_owned),
            stack.map(str::to_owned),
        ))
    }

    fn locate(&mut self, text: &str) -> Option<SourceLocation> {
        let tracked_files = self.tracked_files;
        let resolver = &mut *self.resolver;
        exception_source(text, tracked_files, |file| {
            resolver.relative(file, tracked_files)
        })
    }
}

fn error(
    location: Option<SourceLocation>,
    message: Option<String>,
    details: Option<String>,
) -> TestCaseError {
    let (path, line) = match location {
        Some(SourceLocation { path, line }) => (Some(path), Some(line)),
        None => (None, None),
    };
    TestCaseError {
        path,
        line,
        message,
        details,
    }
}
