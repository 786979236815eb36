//! Integration tests for the entropy estimator.
//!
//! These check the invariants callers rely on: range, determinism,
//! distribution-only dependence, and chunking independence.

mod properties;
mod streaming;
