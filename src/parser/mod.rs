pub mod assembler;
pub mod behave;
pub mod diagnostic;
pub mod mocha;
pub mod status;

use crate::configuration::options::ParseOptions;
use crate::results::TestRunResult;
use futures::future::Ready;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use self::behave::BehaveJsonParser;
use self::mocha::MochaJsonParser;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not valid JSON. Nothing of it is reported.
    #[error("Invalid JSON at {path}\n\n{cause}")]
    MalformedInput {
        path: String,
        #[source]
        cause: serde_json::Error,
    },
}

/// A test runner result format.
///
/// `parse` resolves immediately: it never suspends and performs no I/O, the
/// future only lets callers drive many documents from one executor.
pub trait TestParser {
    fn parse(&mut self, path: &str, content: &str) -> Ready<Result<TestRunResult>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    BehaveJson,
    MochaJson,
}

impl Dialect {
    pub const VARIANTS: &'static [&'static str] = &["behave-json", "mocha-json"];

    /// A fresh parser. Instances carry the inferred work directory, so every
    /// document gets its own.
    pub fn parser(self, options: ParseOptions) -> Box<dyn TestParser> {
        match self {
            Dialect::BehaveJson => Box::new(BehaveJsonParser::new(options)),
            Dialect::MochaJson => Box::new(MochaJsonParser::new(options)),
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::BehaveJson
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "behave-json" => Ok(Dialect::BehaveJson),
            "mocha-json" => Ok(Dialect::MochaJson),
            _ => Err(format!("Reporter '{}' not supported", s)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dialect::BehaveJson => f.write_str("behave-json"),
            Dialect::MochaJson => f.write_str("mocha-json"),
        }
    }
}

pub(crate) fn read_document(path: &str, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|cause| ParseError::MalformedInput {
        path: path.to_owned(),
        cause,
    })
}
