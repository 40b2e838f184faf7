pub(crate) mod error;

use crate::app::error::Error;
use crate::configuration::command_line::Opt;
use crate::configuration::options::{ParseOptions, Settings};
use crate::parser::Dialect;
use crate::reporter;
use crate::results::{TestExecutionResult, TestRunResult};
use crate::utils::path::{normalize_dir_path, normalize_file_path};
use futures::executor::block_on;
use futures::future::join_all;
use std::fs;
use std::path::{Path, PathBuf};

pub struct App {
    dialect: Dialect,
    options: ParseOptions,
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::Read(path.to_owned(), e))
}

impl App {
    /// Command line flags win over `VERDICT_*` variables, which win over the
    /// settings file.
    pub fn new(opt: Opt) -> Result<Self, Error> {
        let settings = Settings::load(opt.config.as_deref())?;

        let dialect = match (opt.reporter, settings.reporter.as_deref()) {
            (Some(dialect), _) => dialect,
            (None, Some(name)) => name.parse().map_err(Error::Configuration)?,
            (None, None) => Dialect::default(),
        };

        let mut tracked_files = settings.tracked_files;
        tracked_files.extend(opt.tracked_files.iter().map(|f| normalize_file_path(f)));
        if let Some(list) = &opt.tracked_files_list {
            tracked_files.extend(
                read(list)?
                    .lines()
                    .map(normalize_file_path)
                    .filter(|f| !f.is_empty()),
            );
        }

        let options = ParseOptions {
            tracked_files,
            work_dir: opt
                .work_dir
                .as_deref()
                .map(|dir| normalize_dir_path(dir, true))
                .or(settings.work_dir),
            parse_errors: !opt.no_parse_errors && settings.parse_errors.unwrap_or(true),
        };
        debug!("Initiated parse options {:#?}", options);

        Ok(App {
            dialect,
            options,
            inputs: opt.files,
            output: opt.output,
        })
    }

    /// Parses every input and writes the canonical results. Returns the
    /// rollup over all runs, where a document that could not be parsed counts
    /// as a failure.
    pub fn run(&self) -> Result<TestExecutionResult, Error> {
        info!(
            "Parsing {} result file(s) as {}",
            self.inputs.len(),
            self.dialect
        );
        let documents = self
            .inputs
            .iter()
            .map(|input| Ok((normalize_file_path(&input.to_string_lossy()), read(input)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        let parsed = block_on(join_all(documents.iter().map(|(path, content)| {
            let mut parser = self.dialect.parser(self.options.clone());
            async move { parser.parse(path, content).await }
        })));

        let mut runs = Vec::with_capacity(parsed.len());
        let mut malformed = 0;
        for result in parsed {
            match result {
                Ok(run) => {
                    info!("{}", reporter::summary(&run));
                    reporter::failures(&run)
                        .iter()
                        .for_each(|failure| warn!("{}", failure));
                    runs.push(run);
                }
                Err(e) => {
                    error!("{}", e);
                    malformed += 1;
                }
            }
        }

        let json = reporter::to_json(&runs)?;
        match &self.output {
            Some(path) => {
                fs::write(path, json).map_err(|e| Error::Write(path.clone(), e))?;
                info!("Results written to {}", path.display());
            }
            None => println!("{}", json),
        }

        if malformed > 0 {
            warn!("{} of {} file(s) could not be parsed", malformed, self.inputs.len());
            return Ok(TestExecutionResult::Failed);
        }
        Ok(TestExecutionResult::rollup(
            runs.iter().map(TestRunResult::result),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use structopt::StructOpt;

    fn opt(args: &[&str]) -> Opt {
        let mut argv = vec!["verdict"];
        argv.extend_from_slice(args);
        Opt::from_iter_safe(argv).unwrap()
    }

    #[test]
    fn test_command_line_overrides_settings_file() {
        let app = App::new(opt(&[
            "-c",
            "tests/fixtures/settings.toml",
            "-r",
            "mocha-json",
            "--work-dir",
            "/repo",
            "--tracked-file",
            "test\\a.js",
            "tests/fixtures/mocha-json.json",
        ]))
        .unwrap();

        assert_eq!(app.dialect, Dialect::MochaJson);
        assert_eq!(app.options.work_dir.as_deref(), Some("/repo/"));
        assert_eq!(
            app.options.tracked_files,
            vec!["features/login.feature", "features/steps/login.py", "test/a.js"]
        );
        assert!(!app.options.parse_errors);
    }

    #[test]
    fn test_settings_file_fills_in_missing_flags() {
        let app = App::new(opt(&["-c", "tests/fixtures/settings.toml", "a.json"])).unwrap();
        assert_eq!(app.dialect, Dialect::BehaveJson);
        assert_eq!(app.options.work_dir.as_deref(), Some("C:/ci/shop/"));
    }

    #[test]
    fn test_run_writes_results_and_reports_failure() {
        let output = env::temp_dir().join(format!("verdict-run-{}.json", std::process::id()));
        let app = App::new(opt(&[
            "-r",
            "behave-json",
            "--tracked-file",
            "features/checkout.feature",
            "-o",
            output.to_str().unwrap(),
            "tests/fixtures/behave.json",
            "tests/fixtures/empty/behave.json",
        ]))
        .unwrap();

        assert_eq!(app.run().unwrap(), TestExecutionResult::Failed);
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        fs::remove_file(&output).unwrap();

        let runs = written.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["path"], "tests/fixtures/behave.json");
        assert_eq!(runs[0]["result"], "failed");
        assert_eq!(runs[0]["suites"][0]["path"], "features/checkout.feature");
        assert_eq!(runs[1]["tests"], 0);
        assert_eq!(runs[1]["result"], "success");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let app = App::new(opt(&["tests/fixtures/does-not-exist.json"])).unwrap();
        match app.run() {
            Err(Error::Read(path, _)) => {
                assert_eq!(path, PathBuf::from("tests/fixtures/does-not-exist.json"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
