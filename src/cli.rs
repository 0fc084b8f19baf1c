//! Command-line front end for `order-summary`.
//!
//! Argument parsing and the read → summarize → write pipeline live here so
//! the binary stays a thin wrapper around stdin, stdout and the exit code.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::core::config::{AppConfig, LogFormat};
use crate::formatting::to_json;
use crate::summarize::{SAMPLE_DOCUMENT, summarize_json};

#[derive(Debug, Parser)]
#[command(name = "order-summary")]
#[command(about = "Summarize customer orders into per-order totals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Order document to read; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Summarize the built-in sample document instead of reading input
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log format on stderr (json or text)
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// `--log-format` if given, otherwise the configured format.
    #[must_use]
    pub fn log_format(&self, config: &AppConfig) -> LogFormat {
        self.log_format.unwrap_or(config.log_format)
    }

    /// `--pretty` turns pretty output on; it never turns a configured `true` off.
    #[must_use]
    pub fn pretty(&self, config: &AppConfig) -> bool {
        self.pretty || config.pretty
    }

    /// Whether input comes from stdin rather than a file.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        !self.sample
            && self
                .input
                .as_ref()
                .is_none_or(|path| path.as_os_str() == "-")
    }
}

fn read_input<R: Read>(cli: &Cli, mut stdin: R) -> Result<String> {
    if cli.sample {
        return Ok(SAMPLE_DOCUMENT.to_string());
    }
    match cli.input.as_ref() {
        Some(path) if !cli.reads_stdin() => fs::read_to_string(path)
            .with_context(|| format!("Failed to read order document from {}", path.display())),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read order document from stdin")?;
            Ok(buf)
        }
    }
}

/// Reads the order document, summarizes it and writes the JSON result.
///
/// Nothing is written to `out` unless every step before the write succeeds.
/// Returns the number of summaries written.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, does
/// not have the order document shape, or `out` cannot be written.
pub fn run<R: Read, W: Write>(
    cli: &Cli,
    config: &AppConfig,
    stdin: R,
    out: &mut W,
) -> Result<usize> {
    let text = read_input(cli, stdin)?;
    let summaries = summarize_json(&text)?;
    let output = to_json(&summaries, cli.pretty(config))?;

    writeln!(out, "{output}").context("Failed to write summaries")?;
    info!(orders = summaries.len(), "Wrote order summaries");
    Ok(summaries.len())
}
