//! Presentation of scan results: console lines, JSON, and persisted values.

use crate::entropy::EntropyResult;
use crate::error::{EntroscanError, Result};
use crate::scan::Analysis;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders the one-line console summary.
///
/// Empty input prints as zero with a note, so the line keeps its shape.
pub fn render_text(analysis: &Analysis, precision: usize) -> String {
    let bits = analysis.entropy.bits_or_zero();
    let mut line = format!(
        "Shannon entropy of {}: {:.*} bits per byte",
        analysis.path.display(),
        precision,
        bits
    );
    if analysis.entropy.is_no_data() {
        line.push_str(" (empty input)");
    }
    line
}

/// Renders the full analysis as pretty-printed JSON.
pub fn render_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis)
        .map_err(|e| EntroscanError::Serialization(e.to_string()))
}

pub fn render(analysis: &Analysis, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(analysis, precision)),
        OutputFormat::Json => render_json(analysis),
    }
}

/// Writes a rendered report as one line.
///
/// A closed stdout surfaces here as an error instead of a panic.
pub fn print_report<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    writeln!(out, "{}", rendered)
        .and_then(|()| out.flush())
        .map_err(EntroscanError::ConsoleWrite)
}

/// Text stored in an output file: the full-precision value, `0.0` for empty input.
pub fn persisted_value(entropy: &EntropyResult) -> String {
    format!("{:?}", entropy.bits_or_zero())
}

/// Writes the entropy value to `path`, replacing any existing content.
pub fn write_value<P: AsRef<Path>>(path: P, entropy: &EntropyResult) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, persisted_value(entropy)).map_err(|source| EntroscanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Entropy value written to {}", path.display());
    Ok(())
}
