//! Water Usage Optimizer - CSV usage analysis & reduction suggestions
//!
//! Usage:
//!   water_usage_optimizer                  Analyze ./water_usage_data.csv
//!   water_usage_optimizer data.csv -v      Analyze another file with debug logging

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use water_usage_optimizer::cli::Cli;
use water_usage_optimizer::data::DataLoader;
use water_usage_optimizer::report::ReportPrinter;
use water_usage_optimizer::stats::UsageAnalyzer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let loader = DataLoader::new(&cli.file);
    let outcome = loader
        .load()
        .with_context(|| format!("Failed to load {}", loader.file_path().display()))?;

    let analysis = UsageAnalyzer::analyze(&outcome.into_table());

    ReportPrinter::display(&analysis);
    Ok(())
}
