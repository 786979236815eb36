//! Configuration for entropy scans.
//!
//! Every section has working defaults, so a config file only needs the keys
//! it changes. Command-line flags are applied on top by the binary.

use crate::error::{EntroscanError, Result};
use crate::io::{
    IOLimits, ReadMode, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_FILE_SIZE, DEFAULT_MMAP_THRESHOLD,
};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Most decimals `f64` can meaningfully show.
pub const MAX_PRECISION: usize = 17;

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File access configuration.
    pub io: IOConfig,
    /// Result presentation configuration.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Parses a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EntroscanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Rejects values no scan can run with.
    pub fn validate(&self) -> Result<()> {
        if self.io.chunk_size == 0 {
            return Err(EntroscanError::InvalidInput(
                "io.chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(EntroscanError::InvalidInput(format!(
                "output.precision must be at most {}",
                MAX_PRECISION
            )));
        }
        Ok(())
    }
}

/// I/O configuration for file reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOConfig {
    /// How file contents are acquired (default: auto).
    pub mode: ReadMode,
    /// Bytes per streamed chunk (default: 1048576 = 1MB).
    pub chunk_size: usize,
    /// Largest file mapped in auto mode (default: 268435456 = 256MB).
    pub mmap_threshold: u64,
    /// Maximum file size to process (default: 17179869184 = 16GB).
    pub max_file_size: u64,
    /// Abort a read after this many seconds (default: none).
    pub timeout_secs: Option<u64>,
}

impl Default for IOConfig {
    fn default() -> Self {
        Self {
            mode: ReadMode::Auto,
            chunk_size: DEFAULT_CHUNK_SIZE,
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            timeout_secs: None,
        }
    }
}

impl IOConfig {
    pub fn limits(&self) -> IOLimits {
        IOLimits {
            max_file_size: self.max_file_size,
            chunk_size: self.chunk_size,
            mmap_threshold: self.mmap_threshold,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Result presentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Console format (default: text).
    pub format: OutputFormat,
    /// Decimals in the console line (default: 4).
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log at DEBUG instead of INFO.
    pub verbose: bool,
    /// Emit JSON log lines.
    pub json: bool,
}
