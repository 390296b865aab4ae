//! Command implementations and argument parsing for the randgraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use randgraph_core::{
    DEFAULT_ID_LENGTH, GeneratorBuilder, GraphError, GraphErrorCode, GraphStats,
    read_graph_from_path, write_graph_to_path,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Where `generate` writes its fixture unless `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "gtest/graphs/auto_generated.csv";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate and inspect random directed graph fixtures."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random graph and write it as a CSV fixture.
    Generate(GenerateCommand),
    /// Read a CSV fixture, report its size, and check its invariants.
    Inspect(InspectCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices to generate.
    #[arg(value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Fixture path; existing files are overwritten.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of each generated vertex identifier.
    #[arg(long = "id-length", default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Fixture to read.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation, serialization, or validation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Stable code logged alongside the failure.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::Graph(err) => err.code(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A fixture was generated and written.
    Generated {
        /// File the fixture was written to.
        path: PathBuf,
        /// Counts for the generated graph.
        stats: GraphStats,
    },
    /// An existing fixture was read and validated.
    Inspected {
        /// File that was read.
        path: PathBuf,
        /// Counts for the fixture.
        stats: GraphStats,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, I/O, or validation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: 4,
///         output: dir.path().join("graph.csv"),
///         seed: Some(1),
///         id_length: 12,
///     }),
/// };
/// let ExecutionSummary::Generated { stats, .. } = run_cli(cli)? else {
///     panic!("generate must report a generated fixture");
/// };
/// assert_eq!(stats.vertices, 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Inspect(command) => {
            span.record("command", field::display("inspect"));
            run_inspect(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(vertices = command.vertices, output = %command.output.display(), seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        vertices,
        output,
        seed,
        id_length,
    } = command;

    let mut builder = GeneratorBuilder::new()
        .with_vertex_count(vertices)
        .with_id_length(id_length);
    if let Some(seed) = seed {
        Span::current().record("seed", seed);
        builder = builder.with_seed(seed);
    }

    let graph = builder.build()?.generate()?;
    write_graph_to_path(&graph, &output)?;
    let stats = graph.stats();
    info!(
        vertices = stats.vertices,
        edges = stats.edges,
        path = %output.display(),
        "command completed"
    );
    Ok(ExecutionSummary::Generated {
        path: output,
        stats,
    })
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(command),
    fields(path = %command.path.display()),
)]
pub(super) fn run_inspect(command: InspectCommand) -> Result<ExecutionSummary, CliError> {
    let InspectCommand { path } = command;
    let graph = read_graph_from_path(&path)?;
    graph.validate()?;
    let stats = graph.stats();
    info!(
        vertices = stats.vertices,
        edges = stats.edges,
        "command completed"
    );
    Ok(ExecutionSummary::Inspected { path, stats })
}

/// Renders `summary` to `writer`.
///
/// `generate` prints only the vertex count so scripts can consume it;
/// `inspect` prints one `label: value` line per count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{ExecutionSummary, render_summary};
/// # use randgraph_core::GraphStats;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated {
///     path: "graph.csv".into(),
///     stats: GraphStats { vertices: 5, edges: 7, max_out_degree: 3 },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"5\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated { stats, .. } => writeln!(writer, "{}", stats.vertices),
        ExecutionSummary::Inspected { stats, .. } => {
            writeln!(writer, "vertices: {}", stats.vertices)?;
            writeln!(writer, "edges: {}", stats.edges)?;
            writeln!(writer, "max out-degree: {}", stats.max_out_degree)
        }
    }
}
