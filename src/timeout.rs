//! Deadline checks for long-running reads.
//!
//! Streaming a very large file can take arbitrarily long. A [`Deadline`] is
//! polled between chunks so the read aborts cleanly once its budget is spent.

use crate::io::error::{IoError, Result};
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Elapsed time after which a still-running read is reported.
const SLOW_READ_WARNING: Duration = Duration::from_secs(30);

/// Wall-clock budget for a single operation.
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    max_duration: Duration,
    checks: u64,
    warned: bool,
    operation_name: String,
}

impl Deadline {
    /// Starts the clock for `operation`.
    pub fn new(max_duration: Duration, operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            max_duration,
            checks: 0,
            warned: false,
            operation_name: operation.into(),
        }
    }

    /// Fails once the budget is used up.
    pub fn check(&mut self) -> Result<()> {
        self.checks += 1;
        let elapsed = self.start.elapsed();

        if elapsed >= self.max_duration {
            error!(
                operation = %self.operation_name,
                checks = self.checks,
                elapsed_ms = elapsed.as_millis() as u64,
                "Operation timed out"
            );
            return Err(IoError::Timeout {
                operation: self.operation_name.clone(),
                seconds: self.max_duration.as_secs(),
            });
        }

        if !self.warned && elapsed > SLOW_READ_WARNING {
            self.warned = true;
            warn!(
                operation = %self.operation_name,
                checks = self.checks,
                elapsed_secs = elapsed.as_secs(),
                "Operation still running"
            );
        }

        Ok(())
    }

    /// Number of times the deadline has been polled.
    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
