//! Error type for reading and writing data files.

use std::path::Path;

/// Errors that can occur while reading or writing advising data files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    MissingInput(String),

    #[error("Could not find `export const {name}` array in {path}")]
    ConstNotFound { name: String, path: String },
}

impl DataError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn missing_input(path: &Path) -> Self {
        Self::MissingInput(path.display().to_string())
    }

    pub fn const_not_found(name: impl Into<String>, path: &Path) -> Self {
        Self::ConstNotFound {
            name: name.into(),
            path: path.display().to_string(),
        }
    }

    /// True when the error is a required input that does not exist.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}
