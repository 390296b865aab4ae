//! Command-line interface orchestration for randgraph.
//!
//! `generate` draws a random directed graph and writes it as a CSV fixture;
//! `inspect` reads a fixture back and reports its size.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_OUTPUT_PATH, ExecutionSummary, GenerateCommand,
    InspectCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
