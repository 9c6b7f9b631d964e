//! Error types for Tideline.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tideline operations.
pub type Result<T> = std::result::Result<T, TidelineError>;

/// Errors that can occur in Tideline.
#[derive(Debug, Error)]
pub enum TidelineError {
    /// Failed to open a data file.
    #[error("Failed to open file {path}: {source}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV framing.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing column '{column}' in {table} data")]
    MissingColumn {
        /// Which table was being read.
        table: &'static str,
        /// Column name that was expected.
        column: String,
    },

    /// The sea-level table has no usable rows, so no year range exists.
    #[error("No sea level records found")]
    EmptyDataset,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TidelineError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(table: &'static str, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table,
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn file_open_message_names_the_cause() {
        let err = TidelineError::file_open(
            PathBuf::from("meantrend.csv"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("meantrend.csv"), "{message}");
        assert!(message.contains("No such file or directory"), "{message}");
    }
}
