//! Core entropy calculation primitives.
//!
//! The byte frequency table lives here and never leaves the module: callers
//! feed bytes in and get an [`EntropyResult`] out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an entropy estimate.
///
/// Empty input has no distribution to measure, so it is reported as
/// [`EntropyResult::NoData`] instead of being folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bits", rename_all = "snake_case")]
pub enum EntropyResult {
    /// Shannon entropy in bits per byte, in `[0, 8]` for well-formed input.
    Bits(f64),
    /// The input contained no bytes.
    NoData,
}

impl EntropyResult {
    /// Returns the measured value, or `None` for empty input.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            EntropyResult::Bits(bits) => Some(bits),
            EntropyResult::NoData => None,
        }
    }

    /// Returns the measured value, treating empty input as zero information.
    #[inline]
    pub fn bits_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Returns true for the empty-input marker.
    #[inline]
    pub fn is_no_data(&self) -> bool {
        matches!(self, EntropyResult::NoData)
    }
}

impl fmt::Display for EntropyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyResult::Bits(bits) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, bits),
                None => write!(f, "{}", bits),
            },
            EntropyResult::NoData => f.write_str("no data"),
        }
    }
}

/// Byte frequency table backing every estimate.
///
/// Invariant: the sum of `counts` always equals `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    #[inline]
    pub(crate) fn add_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    #[inline]
    pub(crate) fn merge(&mut self, other: &Histogram) {
        for (dst, &src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += src;
        }
        self.total += other.total;
    }

    #[inline]
    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Accumulates in ascending byte order so results reproduce exactly.
    pub(crate) fn entropy(&self) -> EntropyResult {
        if self.total == 0 {
            return EntropyResult::NoData;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count == 0 {
                continue;
            }
            let p = (count as f64) / total;
            entropy -= p * p.log2();
        }

        EntropyResult::Bits(entropy)
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental Shannon entropy estimator.
///
/// Feed chunks with [`update`](Self::update) as they arrive and call
/// [`finalize`](Self::finalize) once the stream ends. Splitting the input
/// differently never changes the result: only integer counts are carried
/// between chunks.
///
/// ```
/// use entroscan::entropy::{EntropyEstimator, EntropyResult};
///
/// let mut est = EntropyEstimator::new();
/// est.update(b"aa");
/// est.update(b"bb");
/// assert_eq!(est.finalize(), EntropyResult::Bits(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntropyEstimator {
    histogram: Histogram,
}

impl EntropyEstimator {
    /// Creates an estimator that has seen no bytes.
    #[inline]
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(),
        }
    }

    /// Counts every byte in `chunk`.
    #[inline]
    pub fn update(&mut self, chunk: &[u8]) {
        self.histogram.add_bytes(chunk);
    }

    /// Folds in the counts of an estimator built over another part of the same input.
    #[inline]
    pub fn merge(&mut self, other: &EntropyEstimator) {
        self.histogram.merge(&other.histogram);
    }

    /// Number of bytes counted so far.
    #[inline]
    pub fn len(&self) -> u64 {
        self.histogram.total()
    }

    /// Returns true until at least one byte has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.histogram.total() == 0
    }

    /// Derives the entropy of everything counted so far.
    #[inline]
    pub fn finalize(&self) -> EntropyResult {
        self.histogram.entropy()
    }
}

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 represents no randomness (e.g., all bytes are the same)
/// - 8.0 represents maximum randomness (uniform distribution)
///
/// Empty input yields [`EntropyResult::NoData`].
#[inline]
pub fn shannon_entropy(data: &[u8]) -> EntropyResult {
    let mut est = EntropyEstimator::new();
    est.update(data);
    est.finalize()
}

/// Calculates the Shannon entropy of a stream of byte chunks.
pub fn estimate_chunks<I>(chunks: I) -> EntropyResult
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut est = EntropyEstimator::new();
    for chunk in chunks {
        est.update(chunk.as_ref());
    }
    est.finalize()
}
