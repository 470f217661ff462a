//! Error type returned by every command.

use std::path::PathBuf;

use advising_data::DataError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A required input file does not exist
    #[error("File not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Reading or writing a data file failed
    #[error("{0}")]
    Data(DataError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<DataError> for CliError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::MissingInput(path) => Self::MissingInput(PathBuf::from(path)),
            other => Self::Data(other),
        }
    }
}
