use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use entroscan::config::{Config, LoggingConfig};
use entroscan::io::ReadMode;
use entroscan::report::{self, OutputFormat};
use entroscan::{analyze_path, logging};

/// Calculate the Shannon entropy of files to identify potential obfuscation or encryption.
#[derive(Parser, Debug)]
#[command(name = "entroscan", version)]
struct Args {
    /// The path to the file to analyze.
    filepath: PathBuf,
    /// Store the entropy value in this file.
    #[arg(short, long, value_name = "output_file")]
    output: Option<PathBuf>,
    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,
    /// Print a JSON report instead of the text line.
    #[arg(long)]
    json: bool,
    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
    /// Decimals in the text line.
    #[arg(long)]
    precision: Option<usize>,
    /// How to read the file: auto, mmap or stream.
    #[arg(long)]
    mode: Option<ReadMode>,
    /// Bytes per streamed chunk.
    #[arg(long)]
    chunk_size: Option<usize>,
    /// Refuse files larger than this many bytes.
    #[arg(long)]
    max_file_size: Option<u64>,
    /// Abort the read after this many seconds.
    #[arg(long)]
    timeout: Option<u64>,
    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Logging settings from the flags alone, for errors raised before a config exists.
    fn logging_flags(&self) -> LoggingConfig {
        LoggingConfig {
            verbose: self.verbose,
            json: self.json_logs,
        }
    }

    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if self.verbose {
            config.logging.verbose = true;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(p) = self.precision {
            config.output.precision = p;
        }
        if let Some(mode) = self.mode {
            config.io.mode = mode;
        }
        if let Some(size) = self.chunk_size {
            config.io.chunk_size = size;
        }
        if let Some(size) = self.max_file_size {
            config.io.max_file_size = size;
        }
        if let Some(secs) = self.timeout {
            config.io.timeout_secs = Some(secs);
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let analysis = analyze_path(&args.filepath, &config.io.limits(), config.io.mode)?;
    let rendered = report::render(&analysis, config.output.format, config.output.precision)?;
    report::print_report(std::io::stdout().lock(), &rendered)?;

    if let Some(out) = &args.output {
        report::write_value(out, &analysis.entropy)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let resolved = args.resolve_config();
    match &resolved {
        Ok(config) => logging::init(&config.logging),
        Err(_) => logging::init(&args.logging_flags()),
    }
    let config = match resolved {
        Ok(c) => c,
        Err(e) => {
            error!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
