use config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] io::Error),

    #[error("Failed to write {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] io::Error),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}
