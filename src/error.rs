//! Error types for labelplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labelplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading, generating or displaying a dataset.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A data line ended before all required fields were seen.
    #[error("line {line}: missing {field} field")]
    MissingField {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A field could not be converted to its numeric type.
    #[error("line {line}: cannot parse {field} from {token:?}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The raw token as it appeared in the file.
        token: String,
    },

    /// Generator parameters were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error, including failures of the display surface.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, field: &'static str, token: impl Into<String>) -> Self {
        Self::Parse {
            line,
            field,
            token: token.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
