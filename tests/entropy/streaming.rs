//! Chunked and parallel estimation must match single-buffer estimation.

use crate::common::{all_byte_values, create_temp_file, lcg_bytes, text_like};
use entroscan::entropy::{
    estimate_chunks, par_shannon_entropy, shannon_entropy, EntropyEstimator, EntropyResult,
    MIN_PARALLEL_LEN,
};
use entroscan::io::{IOLimits, ReadMode};
use entroscan::{analyze_path, analyze_reader};
use std::io::Cursor;

#[test]
fn test_arbitrary_splits_match() {
    let data = [text_like(3000), lcg_bytes(17, 3000), all_byte_values()].concat();
    let whole = shannon_entropy(&data);

    for chunk_size in [1usize, 2, 3, 64, 255, 256, 4096, data.len(), data.len() + 1] {
        assert_eq!(estimate_chunks(data.chunks(chunk_size)), whole, "chunk {}", chunk_size);
    }

    // Uneven split points.
    let cuts = [0usize, 1, 10, 11, 500, 2999, 3000, 6000, data.len()];
    let pieces: Vec<&[u8]> = cuts.windows(2).map(|w| &data[w[0]..w[1]]).collect();
    assert_eq!(estimate_chunks(pieces), whole);
}

#[test]
fn test_incremental_update_and_merge() {
    let data = lcg_bytes(23, 10_000);
    let (left, right) = data.split_at(3_333);

    let mut a = EntropyEstimator::new();
    a.update(left);
    let mut b = EntropyEstimator::new();
    b.update(right);
    a.merge(&b);

    assert_eq!(a.len(), data.len() as u64);
    assert_eq!(a.finalize(), shannon_entropy(&data));
}

#[test]
fn test_finalize_mid_stream() {
    let mut est = EntropyEstimator::new();
    est.update(b"aa");
    assert_eq!(est.finalize(), EntropyResult::Bits(0.0));
    est.update(b"bb");
    assert_eq!(est.finalize(), EntropyResult::Bits(1.0));
}

#[test]
fn test_parallel_matches_single_buffer() {
    let data = lcg_bytes(31, MIN_PARALLEL_LEN * 2 + 17);
    assert_eq!(par_shannon_entropy(&data, 1 << 18), shannon_entropy(&data));
}

#[test]
fn test_reader_matches_single_buffer() {
    let data = text_like(12_345);
    for chunk_size in [1usize, 100, 1 << 20] {
        let limits = IOLimits {
            chunk_size,
            ..Default::default()
        };
        let got = analyze_reader(Cursor::new(&data), &limits).unwrap();
        assert_eq!(got, shannon_entropy(&data));
    }
}

#[test]
fn test_file_modes_match_single_buffer() {
    let data = [lcg_bytes(41, 70_000), text_like(30_000)].concat();
    let file = create_temp_file(&data);
    let expected = shannon_entropy(&data);

    let limits = IOLimits {
        chunk_size: 4096,
        ..Default::default()
    };
    for mode in [ReadMode::Mmap, ReadMode::Stream] {
        let analysis = analyze_path(file.path(), &limits, mode).unwrap();
        assert_eq!(analysis.entropy, expected);
        assert_eq!(analysis.size_bytes, data.len() as u64);
    }
}
