//! Command implementations and argument parsing for the kruskal CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kruskal_core::{Edge, Graph, MinimumSpanningForest, Strategy};
use kruskal_providers_text::{TextProviderError, print_edges, print_forest, read_graph, write_forest};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kruskal", about = "Compute minimum spanning forests with Kruskal's algorithm.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load an edge list and compute its minimum spanning forest.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list: a vertex count line, then one `from to weight` per line.
    pub path: PathBuf,

    /// Cycle-detection strategy: `naive` or `disjoint-set` (alias `dsu`).
    #[arg(long, default_value_t = Strategy::DisjointSet)]
    pub strategy: Strategy,

    /// Also write the forest to this file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the normalized edge list before the forest.
    #[arg(long)]
    pub print_edges: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// The output file could not be written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO",
            Self::Text(err) => err.code(),
            Self::Write { .. } => "WRITE",
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Strategy the forest was computed with.
    pub strategy: Strategy,
    /// Normalized input edges, present when `--print-edges` was given.
    pub edges: Option<Vec<Edge>>,
    /// The computed forest.
    pub forest: MinimumSpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or writing the output fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use kruskal_core::Strategy;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1\n1 2 2\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         strategy: Strategy::Naive,
///         output: None,
///         print_edges: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_cost(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        strategy,
        output,
        print_edges: list_edges,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("strategy", field::display(strategy));

    let mut graph = load_graph(&path)?;
    let forest = graph.minimum_spanning_forest(strategy).clone();
    let edges = list_edges.then(|| graph.edges().to_vec());

    if let Some(output) = output {
        save_forest(&output, &forest)?;
    }

    info!(
        vertices = forest.vertex_count(),
        accepted = forest.edges().len(),
        total_cost = forest.total_cost(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        strategy,
        edges,
        forest,
    })
}

#[instrument(name = "cli.load_graph", err)]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_graph(BufReader::new(file))?)
}

#[instrument(name = "cli.save_forest", err, skip(forest))]
pub(super) fn save_forest(path: &Path, forest: &MinimumSpanningForest) -> Result<(), CliError> {
    let to_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    write_forest(forest, &mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

/// Renders `summary` to `writer`: the edge list when requested, then the
/// forest chain and total cost.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(edges) = &summary.edges {
        print_edges(edges, &mut writer)?;
    }
    print_forest(&summary.forest, &mut writer)
}
