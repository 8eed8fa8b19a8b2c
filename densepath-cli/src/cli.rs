//! Command-line orchestration for the densepath batch pipeline.
//!
//! The CLI offers a single `run` command that reads an adjacency matrix and
//! a source vertex from a text stream, gates shortest-path engine selection
//! on the negative-weight detector, runs both MST engines, and renders the
//! results as space-separated values with the literal `INF` standing in for
//! "unreachable" and "no spanning tree".

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use densepath_core::{
    AdjacencyMatrix, GraphError, INFINITY, Weight, bellman_ford, dijkstra, kruskal, prim,
};
use thiserror::Error;
use tracing::info;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "densepath",
    about = "Compute shortest paths and spanning trees over a dense graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Execute the batch pipeline against a matrix read from a file or stdin.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
///
/// The input stream holds a header line `N SRC` (vertex count and 0-indexed
/// source vertex) followed by `N` rows of `N` whitespace-separated entries,
/// each an integer weight or the literal `INF` for "no direct edge".
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the batch input; reads stdin when omitted.
    pub path: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the input stream failed.
    #[error("failed to read input: {source}")]
    Stream {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input text did not follow the batch protocol.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending input line.
        line: usize,
        /// Description of the violation.
        reason: String,
    },
    /// Engine validation rejected the parsed graph.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// The shortest-path engine the detector selected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EngineChoice {
    /// No negative edges: Dijkstra's greedy selection is safe.
    Greedy,
    /// Negative edges present: Bellman-Ford relaxation is required.
    Relaxation,
}

impl EngineChoice {
    /// Returns the engine name for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greedy => "dijkstra",
            Self::Relaxation => "bellman-ford",
        }
    }
}

/// Summarises the outcome of one batch run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BatchSummary {
    /// Which shortest-path engine the detector selected.
    pub engine: EngineChoice,
    /// Per-vertex distances from the source; `INFINITY` for unreachable.
    pub distances: Vec<Weight>,
    /// Kruskal's total weight, or `None` when no spanning tree exists.
    pub tree_total_sorted: Option<Weight>,
    /// Prim's total weight, or `None` when no spanning tree exists.
    pub tree_total_greedy: Option<Weight>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or engine validation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use densepath_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2 0\n0 5\n5 0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.distances, vec![0, 5]);
/// assert_eq!(summary.tree_total_sorted, Some(5));
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<BatchSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

fn run_command(command: RunCommand) -> Result<BatchSummary, CliError> {
    let (matrix, source) = match command.path {
        Some(path) => {
            let file = File::open(&path).map_err(|source| CliError::Io { path, source })?;
            parse_batch(BufReader::new(file))?
        }
        None => parse_batch(io::stdin().lock())?,
    };
    execute(&matrix, source)
}

/// Parses the batch protocol: a `N SRC` header and `N` matrix rows.
///
/// Blank lines are skipped; entries within a row are separated by arbitrary
/// whitespace.
///
/// # Errors
/// Returns [`CliError::Parse`] naming the offending line, or
/// [`CliError::Core`] when the parsed matrix fails validation.
pub fn parse_batch(reader: impl BufRead) -> Result<(AdjacencyMatrix, usize), CliError> {
    let mut lines = reader.lines().enumerate();
    let (header_line, header) = next_content_line(&mut lines)?.ok_or_else(|| CliError::Parse {
        line: 1,
        reason: "missing `N SRC` header".to_owned(),
    })?;

    let header_tokens: Vec<&str> = header.split_whitespace().collect();
    let [node_count, source] = header_tokens.as_slice() else {
        return Err(CliError::Parse {
            line: header_line,
            reason: format!(
                "header must hold exactly 2 tokens, found {}",
                header_tokens.len()
            ),
        });
    };
    let node_count = parse_count(node_count, header_line, "vertex count")?;
    let source = parse_count(source, header_line, "source vertex")?;

    let mut rows = Vec::with_capacity(node_count);
    let mut last_line = header_line;
    while rows.len() < node_count {
        let Some((line, text)) = next_content_line(&mut lines)? else {
            return Err(CliError::Parse {
                line: last_line,
                reason: format!("expected {node_count} matrix rows, found {}", rows.len()),
            });
        };
        last_line = line;
        rows.push(parse_row(&text, line, node_count)?);
    }

    if let Some((line, _)) = next_content_line(&mut lines)? {
        return Err(CliError::Parse {
            line,
            reason: "unexpected content after the matrix".to_owned(),
        });
    }

    Ok((AdjacencyMatrix::from_rows(&rows)?, source))
}

fn next_content_line(
    lines: &mut impl Iterator<Item = (usize, io::Result<String>)>,
) -> Result<Option<(usize, String)>, CliError> {
    for (index, line) in lines {
        let line = line.map_err(|source| CliError::Stream { source })?;
        if !line.trim().is_empty() {
            return Ok(Some((index + 1, line)));
        }
    }
    Ok(None)
}

fn parse_count(token: &str, line: usize, what: &str) -> Result<usize, CliError> {
    token.parse().map_err(|_| CliError::Parse {
        line,
        reason: format!("{what} `{token}` is not a non-negative integer"),
    })
}

fn parse_row(text: &str, line: usize, node_count: usize) -> Result<Vec<Weight>, CliError> {
    let entries: Vec<Weight> = text
        .split_whitespace()
        .map(|token| parse_weight(token, line))
        .collect::<Result<_, _>>()?;
    if entries.len() != node_count {
        return Err(CliError::Parse {
            line,
            reason: format!(
                "matrix row holds {} entries, expected {node_count}",
                entries.len()
            ),
        });
    }
    Ok(entries)
}

fn parse_weight(token: &str, line: usize) -> Result<Weight, CliError> {
    if token == "INF" {
        return Ok(INFINITY);
    }
    token.parse().map_err(|_| CliError::Parse {
        line,
        reason: format!("weight `{token}` is neither an integer nor `INF`"),
    })
}

/// Runs the detector-gated shortest-path engine and both MST engines.
fn execute(matrix: &AdjacencyMatrix, source: usize) -> Result<BatchSummary, CliError> {
    let node_count = matrix.node_count();

    let (engine, paths) = if matrix.has_negative_edge() {
        let edges = matrix.directed_edges();
        (
            EngineChoice::Relaxation,
            bellman_ford(node_count, &edges, source)?,
        )
    } else {
        (EngineChoice::Greedy, dijkstra(matrix, source)?)
    };
    info!(
        engine = engine.as_str(),
        node_count, source, "shortest-path engine selected"
    );

    let tree_total_sorted = kruskal(node_count, &matrix.undirected_edges())?.total_weight();
    let tree_total_greedy = prim(matrix).total_weight();

    Ok(BatchSummary {
        engine,
        distances: paths.distances().to_vec(),
        tree_total_sorted,
        tree_total_greedy,
    })
}

/// Renders `summary` in the batch output format.
///
/// Three lines, each with a trailing newline: the distances, Kruskal's
/// total, Prim's total. Unreachable vertices, missing spanning trees, and
/// totals clamped at the sentinel print as the literal `INF`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use densepath_cli::cli::{BatchSummary, EngineChoice, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = BatchSummary {
///     engine: EngineChoice::Greedy,
///     distances: vec![0, 4, 1_000_000_000_000_000_000],
///     tree_total_sorted: Some(4),
///     tree_total_greedy: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0 4 INF\n4\nINF\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &BatchSummary, mut writer: impl Write) -> io::Result<()> {
    let distances: Vec<String> = summary.distances.iter().map(|&d| format_weight(d)).collect();
    writeln!(writer, "{}", distances.join(" "))?;
    writeln!(writer, "{}", format_total(summary.tree_total_sorted))?;
    writeln!(writer, "{}", format_total(summary.tree_total_greedy))?;
    Ok(())
}

fn format_weight(weight: Weight) -> String {
    if weight >= INFINITY {
        "INF".to_owned()
    } else {
        weight.to_string()
    }
}

fn format_total(total: Option<Weight>) -> String {
    total.map_or_else(|| "INF".to_owned(), format_weight)
}
