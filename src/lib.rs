//! Shannon entropy measurement for file triage.
//!
//! High entropy is a cheap signal that content is encrypted, compressed or
//! obfuscated. [`entropy`] holds the pure estimator; the remaining modules
//! read files, configure scans and present results.

pub mod config;
pub mod entropy;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod scan;
pub mod timeout;

pub use entropy::{estimate_chunks, shannon_entropy, EntropyEstimator, EntropyResult};
pub use error::{EntroscanError, Result};
pub use scan::{analyze_path, analyze_reader, Analysis};
