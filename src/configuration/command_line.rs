use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::parser::Dialect;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Test result documents to parse
    #[structopt(parse(from_os_str), required = true)]
    pub files: Vec<PathBuf>,

    /// Format of the test result documents
    #[structopt(case_insensitive = true, long, short = "r", possible_values = Dialect::VARIANTS)]
    pub reporter: Option<Dialect>,

    /// Project root stripped from paths found in the results, inferred from tracked files when absent
    #[structopt(long)]
    pub work_dir: Option<String>,

    /// Source file known to the project, may be repeated
    #[structopt(long = "tracked-file", number_of_values = 1)]
    pub tracked_files: Vec<String>,

    /// File listing tracked source files one per line, e.g. output of `git ls-files`
    #[structopt(long, parse(from_os_str))]
    pub tracked_files_list: Option<PathBuf>,

    /// Do not extract error details of failed tests
    #[structopt(long)]
    pub no_parse_errors: bool,

    /// Set a custom settings file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// File to which parsed results are written as JSON, stdout by default
    #[structopt(long, short = "o", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
