//! # mutmut-to-json
//!
//! Writes the results of a mutation-testing run as JSON.
//!
//! ## Usage
//! ```bash
//! # Run `mutmut results` and write mut.json (default)
//! cargo run -p mutation-report --bin mutmut-to-json
//!
//! # Convert a saved report instead of running the tool
//! cargo run -p mutation-report --bin mutmut-to-json -- --input results.txt
//!
//! # Custom config and output path
//! cargo run -p mutation-report --bin mutmut-to-json -- --config report.toml --output target/mut.json
//! ```

use clap::Parser;
use mutation_report::{collect_report, write_report, ReportConfig, ReportResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mutmut-to-json",
    version,
    about = "Convert mutmut results into a JSON report grouped by mutant status."
)]
struct Cli {
    /// Config file (default: report.toml in the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parse this saved report text instead of running the tool.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (overrides config and environment).
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ReportResult<()> {
    let mut config = ReportConfig::load(cli.config)?;
    if let Some(output) = cli.output {
        config.output.path = output;
        config.validate()?;
    }

    let report = collect_report(&config, cli.input.as_deref())?;
    write_report(&report, &config.output.path)?;

    info!(path = ?config.output.path, "Done");
    Ok(())
}

/// Default: INFO, can be overridden with RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mutation_report=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
