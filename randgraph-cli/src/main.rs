//! Entry point for the `randgraph` binary.
//!
//! Installs logging, runs the parsed command, and prints its summary on
//! stdout. Failures are logged with their stable error code and turn into a
//! non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use randgraph_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{LoggingError, init_logging},
};
use tracing::error;

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("command failed")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("failed to write summary to stdout")?;
    stdout.flush().context("failed to flush stdout")
}

fn report_failure(err: &anyhow::Error) {
    let message = format!("{err:#}");
    match err.downcast_ref::<CliError>() {
        Some(cli_error) => error!(error = %message, code = %cli_error.code(), "randgraph failed"),
        None => error!(error = %message, "randgraph failed"),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not installed when logging setup fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
