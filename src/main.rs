//! Pet Report - repurchase bar chart viewer

use anyhow::{Context, Result};
use clap::Parser;
use pet_report::config::{Cli, ReportConfig};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = ReportConfig::from_cli(cli)?;
    let mut backend = config.backend()?;

    let stdout = io::stdout();
    pet_report::run(&config, backend.as_mut(), &mut stdout.lock())
        .with_context(|| format!("report for {} failed", config.csv_path.display()))?;

    if config.open_output {
        if let Some(path) = config.output.path() {
            open::that(path).with_context(|| format!("failed to open {}", path.display()))?;
        }
    }

    Ok(())
}
