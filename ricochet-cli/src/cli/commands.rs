//! Argument parsing and command execution for the ricochet CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use ricochet_core::{
    DEFAULT_CUTOFF, ExpansionStrategy, Graph, GraphError, SearchOutcome, TraversalBuilder,
    TraversalError, topology,
};
use ricochet_providers_edgelist::{EdgeList, EdgeListError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ricochet",
    about = "Find shortest paths in Ricochet Robots state graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Search for a shortest path between two vertices.
    Path(PathCommand),
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Vertex the search starts from.
    #[arg(long)]
    pub source: usize,

    /// Vertex the search looks for.
    #[arg(long)]
    pub target: usize,

    /// How each frontier is expanded.
    #[arg(long, value_enum, default_value_t = StrategyArg::Parallel)]
    pub strategy: StrategyArg,

    /// Frontier slices shorter than this are expanded serially.
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: usize,

    /// Run on a dedicated pool with this many workers instead of the global one.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Graph to search.
    #[command(subcommand)]
    pub graph: GraphSource,
}

/// Frontier expansion strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Expand every frontier on the calling thread.
    Serial,
    /// Split large frontiers across worker threads.
    Parallel,
}

impl From<StrategyArg> for ExpansionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Serial => Self::Serial,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Graph sources supported by the `path` command.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Load an edge list, one `u v` pair per line.
    Edges(EdgesArgs),
    /// Build an N-dimensional grid.
    Lattice(LatticeArgs),
    /// Build a hypercube.
    Hypercube(HypercubeArgs),
}

/// Edge-list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct EdgesArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Vertex count; defaults to the largest id in the file plus one.
    #[arg(long)]
    pub size: Option<usize>,
}

/// Lattice topology arguments.
#[derive(Debug, Args, Clone)]
pub struct LatticeArgs {
    /// Side lengths, comma separated, e.g. `3,3,3`.
    #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
    pub dims: Vec<usize>,
}

/// Hypercube topology arguments.
#[derive(Debug, Args, Clone)]
pub struct HypercubeArgs {
    /// Number of dimensions; the cube has `2^dimensions` vertices.
    #[arg(long)]
    pub dimensions: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// A demo topology could not be built.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Traversal configuration or search failed.
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::EdgeList(error) => Some(error.code().as_str()),
            Self::Graph(error) => Some(error.code().as_str()),
            Self::Traversal(error) => Some(error.code().as_str()),
        }
    }

    /// Returns the graph-level code when an edge-list or traversal error
    /// wraps one.
    #[must_use]
    pub fn graph_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::EdgeList(error) => error.graph_code(),
            Self::Traversal(error) => error.graph_code(),
            _ => None,
        };
        code.map(|code| code.as_str())
    }
}

/// Summarises a completed `path` command.
#[derive(Debug, Clone)]
pub struct PathSummary {
    /// Human-readable description of the searched graph.
    pub graph: String,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Number of undirected edges in the graph.
    pub edges: usize,
    /// Start vertex.
    pub source: usize,
    /// Goal vertex.
    pub target: usize,
    /// Result of the search.
    pub outcome: SearchOutcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built, the traversal is
/// misconfigured, or a vertex is out of range. An unreachable target is a
/// successful run whose summary carries [`SearchOutcome::NotFound`].
///
/// # Examples
/// ```
/// # use ricochet_cli::cli::{Cli, Command, GraphSource, LatticeArgs, PathCommand, StrategyArg, run_cli};
/// let cli = Cli {
///     command: Command::Path(PathCommand {
///         source: 0,
///         target: 8,
///         strategy: StrategyArg::Parallel,
///         cutoff: 2,
///         threads: None,
///         graph: GraphSource::Lattice(LatticeArgs { dims: vec![3, 3] }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.distance(), Some(4));
/// # Ok::<(), ricochet_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<PathSummary, CliError> {
    match cli.command {
        Command::Path(path) => {
            Span::current().record("command", field::display("path"));
            run_path(path)
        }
    }
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(
        source = command.source,
        target = command.target,
        strategy = field::Empty,
        graph = field::Empty,
    ),
)]
pub(super) fn run_path(command: PathCommand) -> Result<PathSummary, CliError> {
    let PathCommand {
        source,
        target,
        strategy,
        cutoff,
        threads,
        graph,
    } = command;

    let strategy = ExpansionStrategy::from(strategy);
    let traversal = TraversalBuilder::new()
        .with_strategy(strategy)
        .with_cutoff(cutoff)
        .with_threads(threads)
        .build()?;

    let span = Span::current();
    span.record("strategy", field::display(strategy.as_str()));

    let (label, graph) = load_graph(graph)?;
    span.record("graph", field::display(&label));

    let outcome = traversal.search(&graph, source, target)?;
    info!(
        graph = label.as_str(),
        found = outcome.is_found(),
        distance = outcome.distance(),
        "command completed"
    );
    Ok(PathSummary {
        graph: label,
        vertices: graph.len(),
        edges: graph.edge_count(),
        source,
        target,
        outcome,
    })
}

pub(super) fn load_graph(source: GraphSource) -> Result<(String, Graph), CliError> {
    match source {
        GraphSource::Edges(EdgesArgs { path, size }) => {
            let name = derive_graph_name(&path);
            let list = EdgeList::try_from_reader(name.as_str(), open_edge_reader(&path)?)?;
            let graph = list.into_graph(size)?;
            Ok((name, graph))
        }
        GraphSource::Lattice(LatticeArgs { dims }) => {
            let graph = topology::lattice(&dims)?;
            let sides: Vec<String> = dims.iter().map(ToString::to_string).collect();
            Ok((format!("lattice {}", sides.join("x")), graph))
        }
        GraphSource::Hypercube(HypercubeArgs { dimensions }) => {
            let graph = topology::hypercube(dimensions)?;
            Ok((format!("hypercube {dimensions}"), graph))
        }
    }
}

#[instrument(name = "cli.open_edge_reader", err, fields(path = field::Empty))]
pub(super) fn open_edge_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edges".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use ricochet_cli::cli::{PathSummary, render_summary};
/// # use ricochet_core::{PredecessorMap, SearchOutcome, SearchStats};
/// let summary = PathSummary {
///     graph: "demo".into(),
///     vertices: 3,
///     edges: 2,
///     source: 0,
///     target: 2,
///     outcome: SearchOutcome::Found {
///         predecessors: PredecessorMap::new(0, 2, vec![None, Some(0), Some(1)]),
///         stats: SearchStats::default(),
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("distance: 2\npath: 0 -> 1 -> 2\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &PathSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "target: {}", summary.target)?;
    match summary.outcome.path() {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
            writeln!(writer, "distance: {}", path.len() - 1)?;
            writeln!(writer, "path: {}", steps.join(" -> "))?;
        }
        None => writeln!(writer, "no path")?,
    }
    Ok(())
}
