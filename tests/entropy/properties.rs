//! Distribution properties of the estimator.

use crate::common::{all_byte_values, lcg_bytes, text_like};
use entroscan::entropy::{shannon_entropy, EntropyResult, MAX_BITS_PER_BYTE};

fn bits(data: &[u8]) -> f64 {
    shannon_entropy(data)
        .value()
        .expect("non-empty input must produce a value")
}

#[test]
fn test_range_for_varied_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![0x41],
        b"ab".to_vec(),
        text_like(10_000),
        lcg_bytes(1, 1),
        lcg_bytes(2, 100),
        lcg_bytes(3, 65_536),
        all_byte_values(),
        vec![0xff; 4096],
    ];

    for data in &inputs {
        let h = bits(data);
        assert!(
            (0.0..=MAX_BITS_PER_BYTE).contains(&h),
            "entropy {} out of range for {} bytes",
            h,
            data.len()
        );
    }
}

#[test]
fn test_empty_is_no_data() {
    let result = shannon_entropy(b"");
    assert_eq!(result, EntropyResult::NoData);
    assert_eq!(result.bits_or_zero(), 0.0);
}

#[test]
fn test_single_value_is_exactly_zero() {
    for len in [1usize, 2, 17, 4096] {
        for byte in [0u8, 0x7f, 0xff] {
            assert_eq!(shannon_entropy(&vec![byte; len]), EntropyResult::Bits(0.0));
        }
    }
}

#[test]
fn test_all_byte_values_is_maximum() {
    let h = bits(&all_byte_values());
    assert!((h - 8.0).abs() < 1e-12, "got {}", h);
}

#[test]
fn test_documented_examples() {
    assert_eq!(format!("{:.4}", shannon_entropy(b"aaaa")), "0.0000");
    assert_eq!(format!("{:.4}", shannon_entropy(b"ab")), "1.0000");
    assert_eq!(format!("{:.4}", shannon_entropy(b"aabb")), "1.0000");
    assert_eq!(format!("{:.4}", shannon_entropy(&all_byte_values())), "8.0000");
}

#[test]
fn test_concatenation_with_itself() {
    for data in [text_like(333), lcg_bytes(7, 1000), b"aab".to_vec()] {
        let doubled = [data.as_slice(), data.as_slice()].concat();
        assert!((bits(&data) - bits(&doubled)).abs() < 1e-12);
    }
}

#[test]
fn test_order_independence() {
    let data = lcg_bytes(11, 5000);

    let mut reversed = data.clone();
    reversed.reverse();

    let mut sorted = data.clone();
    sorted.sort_unstable();

    let mut rotated = data.clone();
    rotated.rotate_left(1234);

    // Same counts, same ascending-order accumulation: bit-identical.
    let h = shannon_entropy(&data);
    assert_eq!(shannon_entropy(&reversed), h);
    assert_eq!(shannon_entropy(&sorted), h);
    assert_eq!(shannon_entropy(&rotated), h);
}

#[test]
fn test_deterministic_across_calls() {
    let data = lcg_bytes(99, 100_000);
    let first = bits(&data);
    for _ in 0..5 {
        assert_eq!(bits(&data).to_bits(), first.to_bits());
    }
}

#[test]
fn test_random_data_is_high_entropy() {
    let h = bits(&lcg_bytes(5, 1 << 20));
    assert!(h > 7.99, "got {}", h);
}

#[test]
fn test_text_is_low_entropy() {
    let h = bits(&text_like(8192));
    assert!(h > 3.0 && h < 5.0, "got {}", h);
}

#[test]
fn test_independent_estimates_run_concurrently() {
    let inputs: Vec<Vec<u8>> = (0..8).map(|i| lcg_bytes(i, 50_000)).collect();
    let expected: Vec<EntropyResult> = inputs.iter().map(|d| shannon_entropy(d)).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|d| std::thread::spawn(move || shannon_entropy(&d)))
        .collect();
    let got: Vec<EntropyResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(got, expected);
}
