//! Shannon entropy estimation over byte buffers and byte-chunk streams.
//!
//! This module is pure: it does no I/O, keeps no global state, and never
//! logs. Each estimate owns its own frequency table, so any number of them
//! can run concurrently on independent inputs.
//!
//! - [`shannon_entropy`] for a fully materialized buffer
//! - [`estimate_chunks`] and [`EntropyEstimator`] for streamed input
//! - [`par_shannon_entropy`] for large buffers counted on the rayon pool
//!
//! # Example
//!
//! ```
//! use entroscan::entropy::{estimate_chunks, shannon_entropy, EntropyResult};
//!
//! assert_eq!(shannon_entropy(b"aabb"), EntropyResult::Bits(1.0));
//! assert_eq!(estimate_chunks([&b"aa"[..], &b"bb"[..]]), EntropyResult::Bits(1.0));
//! assert_eq!(shannon_entropy(b""), EntropyResult::NoData);
//! ```

pub mod core;
pub mod parallel;

pub use self::core::{estimate_chunks, shannon_entropy, EntropyEstimator, EntropyResult};
pub use self::parallel::{par_shannon_entropy, MIN_PARALLEL_LEN};

/// Maximum entropy of a byte alphabet, in bits per byte.
pub const MAX_BITS_PER_BYTE: f64 = 8.0;
