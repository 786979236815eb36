//! Logging and tracing infrastructure.
//!
//! Structured logging through the tracing crate. Output goes to stderr so
//! stdout carries only scan results.

use crate::config::LoggingConfig;
use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

// `--verbose` wins over RUST_LOG; otherwise RUST_LOG, then INFO.
fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .init();

        if verbose {
            debug!("Verbose logging enabled.");
        }
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_current_span(true);

        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .init();

        if verbose {
            debug!("Verbose logging enabled (JSON mode).");
        }
    });
}

/// Initialize tracing from the logging section of a [`Config`](crate::config::Config).
pub fn init(config: &LoggingConfig) {
    if config.json {
        init_tracing_json(config.verbose);
    } else {
        init_tracing(config.verbose);
    }
}
