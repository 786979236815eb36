//! Parallel byte counting for large in-memory buffers.

use super::core::{EntropyEstimator, EntropyResult};
use rayon::prelude::*;

/// Below this size the work is not worth splitting across threads.
pub const MIN_PARALLEL_LEN: usize = 4 * 1024 * 1024;

/// Calculates the Shannon entropy of `data` by counting disjoint chunks on
/// the rayon pool and merging the counts.
///
/// The result is identical to [`shannon_entropy`](super::shannon_entropy):
/// only integer counts are combined, and the logarithm pass runs once over
/// the merged table.
pub fn par_shannon_entropy(data: &[u8], chunk_size: usize) -> EntropyResult {
    if data.len() < MIN_PARALLEL_LEN {
        return super::shannon_entropy(data);
    }

    // One table per rayon split, not per chunk.
    data.par_chunks(chunk_size.max(1))
        .fold(EntropyEstimator::new, |mut est, chunk| {
            est.update(chunk);
            est
        })
        .reduce(EntropyEstimator::new, |mut acc, part| {
            acc.merge(&part);
            acc
        })
        .finalize()
}
