//! Custom error types for rustreadinglog.
//!
//! Only whole-run failures live here. Field-level problems (missing columns,
//! empty cells, non-numeric years) degrade to empty values and never surface
//! as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rustreadinglog operations.
#[derive(Debug, Error)]
pub enum ReadingLogError {
    /// Input file could not be opened
    #[error("Cannot read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Cannot write output {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV tokenizing or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `ReadingLogError`
pub type Result<T> = std::result::Result<T, ReadingLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_names_path() {
        let err = ReadingLogError::Input {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("not found"));
    }
}
