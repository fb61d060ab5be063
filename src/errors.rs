use thiserror::Error;

use crate::path::{Command, Segment};

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseFailure),
    #[error("Invalid value for {0}: '{1}'")]
    InvalidValue(String, String),
    #[error("Command line error: {0}")]
    Cli(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }
}

/// Reasons path data could not be (completely) parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unrecognized path data at offset {offset}: '{remaining}'")]
    Tokenize { offset: usize, remaining: String },
    #[error("param not a number: {command},{found}")]
    NotANumber { command: Command, found: String },
    #[error("path data ended short: '{command}' needs {needed} params, {available} available")]
    EndedShort {
        command: Command,
        needed: usize,
        available: usize,
    },
    #[error("bad segment: '{command}' takes no params")]
    BadSegment { command: Command },
    #[error("'{command}' takes {expected} params, {found} given")]
    WrongArity {
        command: Command,
        expected: usize,
        found: usize,
    },
}

/// A failed parse, carrying any segments successfully read before the fault.
///
/// Tokenization failures always carry an empty `partial` list.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error} ({} segments parsed)", .partial.len())]
pub struct ParseFailure {
    pub error: ParseError,
    pub partial: Vec<Segment>,
}
