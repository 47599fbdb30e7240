//! Command-line interface for merge-sources
//!
//! With no arguments, merges `Sources/` into `merged_code.swift` in the
//! working directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, resolve_job, CliOverrides};
use crate::domain::MergeJob;
use crate::merge::merge;
use crate::scan::scan_sources;

/// Merge every Swift source file under a directory into a single file
#[derive(Parser)]
#[command(name = "merge-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively for .swift files [default: Sources]
    #[arg(short, long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// File to write the merged output to [default: merged_code.swift]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to config file (merge-sources.toml or merge-sources.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the files that would be merged, in order, without writing
    #[arg(long)]
    list: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A set RUST_LOG is used as-is; otherwise --verbose picks DEBUG over WARN.
    let fallback = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let job = resolve_job(CliOverrides { source_dir: cli.source, output: cli.output }, config);

    if cli.list {
        list(&job)
    } else {
        run_merge(&job)
    }
}

fn run_merge(job: &MergeJob) -> Result<()> {
    let stats = merge(job).with_context(|| {
        format!(
            "Failed to merge {} into {}",
            job.source_directory.display(),
            job.output_path.display()
        )
    })?;

    println!("Merge complete! Output file: {}", stats.output_path().display());
    Ok(())
}

fn list(job: &MergeJob) -> Result<()> {
    let sources = scan_sources(&job.source_directory, &job.output_path)
        .with_context(|| format!("Failed to scan {}", job.source_directory.display()))?;

    for source in &sources {
        println!("{}", source.relative_path);
    }
    tracing::info!("{} files would be merged", sources.len());
    Ok(())
}
