#![no_main]
use entroscan::entropy::{estimate_chunks, shannon_entropy, EntropyResult};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let whole = shannon_entropy(data);
    match whole {
        EntropyResult::NoData => assert!(data.is_empty()),
        EntropyResult::Bits(h) => assert!((0.0..=8.0 + 1e-9).contains(&h)),
    }

    // First byte picks the split size.
    let chunk = data.first().map_or(1, |&b| b as usize + 1);
    assert_eq!(estimate_chunks(data.chunks(chunk)), whole);
});
