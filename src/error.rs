//! Error types for entroscan.
//!
//! The entropy core has no error type: empty input is a value
//! ([`EntropyResult::NoData`](crate::entropy::EntropyResult::NoData)).
//! Everything here belongs to the file, config and output glue around it.

use crate::io::error::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for entroscan operations.
#[derive(Debug, Error)]
pub enum EntroscanError {
    /// Input file errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Configuration file could not be read
    #[error("Cannot read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for `Config`
    #[error("Invalid configuration")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration values out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The result could not be persisted
    #[error("Error writing to output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written to the console
    #[error("Error writing report")]
    ConsoleWrite(#[source] std::io::Error),

    /// Report rendering errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for entroscan operations
pub type Result<T> = std::result::Result<T, EntroscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EntroscanError::InvalidInput("chunk_size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: chunk_size must be positive");

        let err = EntroscanError::OutputWrite {
            path: PathBuf::from("/nonexistent/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Error writing to output file /nonexistent/out.txt"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err: EntroscanError = IoError::NotFound {
            path: PathBuf::from("sample.bin"),
        }
        .into();
        assert_eq!(err.to_string(), "File 'sample.bin' does not exist.");
    }
}
