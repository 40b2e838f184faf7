use crate::results::{
    TestCaseResult, TestGroupResult, TestRunResult, TestSuiteResult,
};

/// Collects suites in encounter order and hands out the finished, sorted run.
#[derive(Debug, Default)]
pub(crate) struct RunAssembler {
    suites: Vec<SuiteAssembler>,
}

#[derive(Debug)]
pub(crate) struct SuiteAssembler {
    path: String,
    groups: Vec<TestGroupResult>,
}

impl RunAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new suite even if one with the same path exists.
    pub fn open_suite(&mut self, path: String) -> &mut SuiteAssembler {
        let index = self.suites.len();
        self.suites.push(SuiteAssembler::new(path));
        &mut self.suites[index]
    }

    /// The suite with this path, created on first sight.
    pub fn suite(&mut self, path: String) -> &mut SuiteAssembler {
        match self.suites.iter().position(|s| s.path == path) {
            Some(index) => &mut self.suites[index],
            None => self.open_suite(path),
        }
    }

    pub fn finish(self, source: &str) -> TestRunResult {
        let suites = self.suites.into_iter().map(SuiteAssembler::build).collect();
        let mut result = TestRunResult::new(source.to_owned(), suites);
        result.sort();
        result
    }
}

impl SuiteAssembler {
    fn new(path: String) -> Self {
        Self {
            path,
            groups: Vec::new(),
        }
    }

    /// Appends to the first group with an equal name. A missing name is its
    /// own key.
    pub fn push(&mut self, group: Option<String>, test: TestCaseResult) {
        match self.groups.iter_mut().find(|g| g.name() == group.as_deref()) {
            Some(existing) => existing.push(test),
            None => self.groups.push(TestGroupResult::new(group, vec![test])),
        }
    }

    fn build(self) -> TestSuiteResult {
        TestSuiteResult::new(self.path, self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::TestExecutionResult;

    fn case(name: &str, duration: f64) -> TestCaseResult {
        TestCaseResult::new(name.to_owned(), TestExecutionResult::Success, duration, None)
    }

    #[test]
    fn test_groups_are_deduplicated_by_name_in_encounter_order() {
        let mut run = RunAssembler::new();
        let suite = run.open_suite("a.feature".to_owned());
        suite.push(Some("login".to_owned()), case("first", 1.0));
        suite.push(None, case("loose", 1.0));
        suite.push(Some("login".to_owned()), case("second", 2.0));
        suite.push(None, case("other loose", 1.0));

        let built = run.suites.remove(0).build();
        assert_eq!(built.groups().len(), 2);
        let login: Vec<_> = built.groups()[0].tests().iter().map(|t| t.name()).collect();
        assert_eq!(login, vec!["first", "second"]);
        assert_eq!(built.groups()[1].name(), None);
        assert_eq!(built.groups()[1].tests().len(), 2);
    }

    #[test]
    fn test_suite_lookup_reuses_path_but_open_suite_does_not() {
        let mut run = RunAssembler::new();
        run.suite("a.js".to_owned()).push(None, case("one", 1.0));
        run.suite("a.js".to_owned()).push(None, case("two", 1.0));
        run.open_suite("a.js".to_owned()).push(None, case("three", 1.0));
        assert_eq!(run.suites.len(), 2);

        let result = run.finish("results.json");
        assert_eq!(result.tests(), 3);
        assert_eq!(result.duration(), 3.0);
    }
}
