//! # tablerank-cli
//!
//! Command-line interface for the tablerank table engine.

mod config;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use config::{OutputFormat, PipelineConfig};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tablerank_table::{sample, Table};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// tablerank - rank, sort and print delimited tables
#[derive(Parser)]
#[command(name = "tablerank")]
#[command(author, version, about = "Rank rows of a CSV table and print them aligned", long_about = None)]
struct Cli {
    /// CSV file to read ("-" for stdin); the built-in city sample when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// JSON file with pipeline settings
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Numeric column the rank is computed from
    #[arg(short = 's', long = "rank-source")]
    rank_source: Option<String>,

    /// Name of the computed rank column
    #[arg(short = 'r', long = "rank-column")]
    rank_column: Option<String>,

    /// Column to sort by (defaults to the rank column)
    #[arg(long = "sort-by")]
    sort_by: Option<String>,

    /// Sort smaller values first
    #[arg(short = 'a', long = "ascending")]
    ascending: bool,

    /// Padding added beyond each column's widest value
    #[arg(short = 'g', long = "gap")]
    gap: Option<usize>,

    /// Left-align a column (repeatable)
    #[arg(short = 'l', long = "left", value_name = "COLUMN")]
    left_aligned: Vec<String>,

    /// Print a line of column names first
    #[arg(long = "header")]
    header: bool,

    /// Output format (table, json, csv)
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    debug!(?config, "resolved pipeline configuration");

    let source = read_input(cli.file.as_deref())?;
    let table = Table::parse(&source).context("Failed to parse input")?;
    let table = pipeline::run(table, &config)?;
    let output = pipeline::format_output(&table, &config)?;

    print!("{output}");
    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut PipelineConfig, cli: &Cli) {
    if let Some(source) = &cli.rank_source {
        config.rank_source.clone_from(source);
    }
    if let Some(column) = &cli.rank_column {
        config.rank_column.clone_from(column);
    }
    if cli.sort_by.is_some() {
        config.sort_by.clone_from(&cli.sort_by);
    }
    if cli.ascending {
        config.ascending = true;
    }
    if let Some(gap) = cli.gap {
        config.gap = gap;
    }
    if !cli.left_aligned.is_empty() {
        config.left_aligned.clone_from(&cli.left_aligned);
    }
    if cli.header {
        config.header = true;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
}

/// Read the source text. Files usually end with a line break, which is
/// dropped here so the last line is not taken for an empty row.
fn read_input(file: Option<&Path>) -> Result<String> {
    let mut text = match file {
        None => return Ok(sample::CITIES.to_string()),
        Some(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let cli = Cli::parse_from([
            "tablerank",
            "--gap",
            "5",
            "-l",
            "country",
            "--sort-by",
            "population",
            "--format",
            "json",
        ]);
        let mut config = PipelineConfig {
            gap: 1,
            header: true,
            ..PipelineConfig::default()
        };
        apply_overrides(&mut config, &cli);

        assert_eq!(config.gap, 5);
        assert_eq!(config.left_aligned, vec!["country".to_string()]);
        assert_eq!(config.sort_column(), "population");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.header);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["tablerank"]);
        let mut config = PipelineConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_sample_input_when_no_file() {
        assert_eq!(read_input(None).unwrap(), sample::CITIES);
    }
}
