use crate::configuration::constants::common::ENV_PREFIX;
use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::path::Path;

/// What a parser needs to know about the project the results came from.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Known source files, relative to the project root.
    pub tracked_files: Vec<String>,
    /// Project root. Inferred from `tracked_files` when absent.
    pub work_dir: Option<String>,
    pub parse_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tracked_files: Vec::new(),
            work_dir: None,
            parse_errors: true,
        }
    }
}

/// Settings file contents, overridden by `VERDICT_*` environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reporter: Option<String>,
    #[serde(deserialize_with = "crate::configuration::deserialize::file_paths::deserialize")]
    pub tracked_files: Vec<String>,
    #[serde(deserialize_with = "crate::configuration::deserialize::dir_path::deserialize")]
    pub work_dir: Option<String>,
    pub parse_errors: Option<bool>,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;
        config.try_into()
    }
}
