//! File-level entry points: acquire bytes, hand them to the estimator.

use crate::entropy::{par_shannon_entropy, EntropyEstimator, EntropyResult};
use crate::error::Result;
use crate::io::{self, IOLimits, ReadMode, SafeReader};
use crate::timeout::Deadline;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span};

/// Entropy measurement of one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Path as given by the caller.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// How the bytes were acquired (never `Auto`).
    pub mode: ReadMode,
    pub entropy: EntropyResult,
}

/// Measures the entropy of the file at `path`.
pub fn analyze_path<P: AsRef<Path>>(path: P, limits: &IOLimits, mode: ReadMode) -> Result<Analysis> {
    let path = path.as_ref();
    let size = io::validate_input(path)?;
    let mode = mode.resolve(size, limits.mmap_threshold);

    let span = debug_span!("analyze", path = %path.display(), size, mode = %mode);
    let _guard = span.enter();

    let entropy = match mode {
        ReadMode::Stream => {
            let mut est = EntropyEstimator::new();
            for chunk in io::open_chunked(path, limits)? {
                est.update(&chunk?);
            }
            est.finalize()
        }
        _ => {
            let reader = SafeReader::open(path, limits)?;
            estimate_mapped(reader.as_bytes(), limits)?
        }
    };

    debug!(entropy = ?entropy.value(), "Analysis complete");

    Ok(Analysis {
        path: path.to_path_buf(),
        size_bytes: size,
        mode,
        entropy,
    })
}

/// Measures the entropy of everything `reader` yields.
pub fn analyze_reader<R: Read>(reader: R, limits: &IOLimits) -> Result<EntropyResult> {
    let mut chunks = io::ChunkReader::new(reader, limits.chunk_size);
    if let Some(t) = limits.timeout {
        chunks = chunks.with_deadline(Deadline::new(t, "read stream"));
    }

    let mut est = EntropyEstimator::new();
    for chunk in chunks {
        est.update(&chunk?);
    }
    Ok(est.finalize())
}

// A mapped file is counted in parallel unless a deadline has to be polled.
fn estimate_mapped(data: &[u8], limits: &IOLimits) -> Result<EntropyResult> {
    let Some(t) = limits.timeout else {
        return Ok(par_shannon_entropy(data, limits.chunk_size));
    };

    let mut deadline = Deadline::new(t, "count mapped file");
    let mut est = EntropyEstimator::new();
    for chunk in data.chunks(limits.chunk_size.max(1)) {
        deadline.check()?;
        est.update(chunk);
    }
    Ok(est.finalize())
}
