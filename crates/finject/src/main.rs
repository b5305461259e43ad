//! finject - Entry Point
//!
//! Binary entry point for the `finject` command line. Reports go to stdout, logs to stderr.
//! Exits with a failure status when any error-level violation was reported.

use clap::Parser;
use finject::cli::{self, Cli};
use finject_infrastructure::logging::init_logging;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;
    init_logging(config.logging.clone())?;

    let report = cli::execute(&cli.command, &config)?;
    println!(
        "{}",
        cli::render_report(&report, cli.command.input().format)
    );

    Ok(if report.summary.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
