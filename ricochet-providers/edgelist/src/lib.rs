//! Edge-list provider: builds a [`Graph`] from line-oriented text.
//!
//! Each line holds two whitespace-separated vertex identifiers. Blank lines
//! and lines starting with `#` are skipped.
//!
//! ```
//! use ricochet_providers_edgelist::EdgeList;
//!
//! let text = "# square\n0 1\n1 2\n2 3\n3 0\n";
//! let edges = EdgeList::try_from_reader("square", text.as_bytes())?;
//! let graph = edges.into_graph(None)?;
//! assert_eq!(graph.len(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), ricochet_providers_edgelist::EdgeListError>(())
//! ```

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ricochet_core::{Graph, GraphError, GraphErrorCode};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or materialising an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("i/o error: {source}")]
    Io {
        /// Error reported by the reader.
        #[from]
        source: std::io::Error,
    },
    /// A line did not hold exactly two unsigned integers.
    #[error("line {line}: expected two vertex ids, found `{content}`")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The offending line with surrounding whitespace trimmed.
        content: String,
    },
    /// The input contained no edges.
    #[error("edge list contains no edges")]
    EmptyInput,
    /// An endpoint is so large that no vertex count can include it.
    #[error("line {line}: vertex {vertex} leaves no room for a vertex count")]
    VertexIdOverflow {
        /// One-based line number of the edge.
        line: usize,
        /// The offending endpoint.
        vertex: usize,
    },
    /// An endpoint does not fit the requested vertex count.
    #[error("line {line}: vertex {vertex} is out of range for {size} vertices")]
    VertexOutOfRange {
        /// One-based line number of the edge.
        line: usize,
        /// The offending endpoint.
        vertex: usize,
        /// Requested vertex count.
        size: usize,
    },
    /// The graph rejected the requested vertex count.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl EdgeListError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io { .. } => EdgeListErrorCode::Io,
            Self::Malformed { .. } => EdgeListErrorCode::Malformed,
            Self::EmptyInput => EdgeListErrorCode::EmptyInput,
            Self::VertexIdOverflow { .. } => EdgeListErrorCode::VertexIdOverflow,
            Self::VertexOutOfRange { .. } => EdgeListErrorCode::VertexOutOfRange,
            Self::Graph(_) => EdgeListErrorCode::GraphFailure,
        }
    }

    /// Returns the inner [`GraphErrorCode`] when the graph rejected the list.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Machine-readable error codes for [`EdgeListError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// The underlying reader failed.
    Io,
    /// A line did not hold exactly two unsigned integers.
    Malformed,
    /// The input contained no edges.
    EmptyInput,
    /// An endpoint is too large for any vertex count.
    VertexIdOverflow,
    /// An endpoint does not fit the requested vertex count.
    VertexOutOfRange,
    /// The graph rejected the requested vertex count.
    GraphFailure,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGELIST_IO",
            Self::Malformed => "EDGELIST_MALFORMED",
            Self::EmptyInput => "EDGELIST_EMPTY_INPUT",
            Self::VertexIdOverflow => "EDGELIST_VERTEX_ID_OVERFLOW",
            Self::VertexOutOfRange => "EDGELIST_VERTEX_OUT_OF_RANGE",
            Self::GraphFailure => "EDGELIST_GRAPH_FAILURE",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed undirected edges together with the line each came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    name: String,
    edges: Vec<(usize, usize)>,
    lines: Vec<usize>,
    vertex_bound: usize,
}

impl EdgeList {
    /// Creates an edge list from in-memory pairs. Line numbers are the
    /// one-based positions in `edges`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when `edges` is empty and
    /// [`EdgeListError::VertexIdOverflow`] when an endpoint is `usize::MAX`.
    pub fn new(name: impl Into<String>, edges: Vec<(usize, usize)>) -> Result<Self, EdgeListError> {
        let lines = (1..=edges.len()).collect();
        Self::from_parts(name.into(), edges, lines)
    }

    /// Parses an edge list from a buffered reader.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when reading fails,
    /// [`EdgeListError::Malformed`] for a line that is not two unsigned
    /// integers, [`EdgeListError::EmptyInput`] when no edges remain after
    /// skipping comments and blank lines, and
    /// [`EdgeListError::VertexIdOverflow`] when an endpoint is `usize::MAX`.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut edges = Vec::new();
        let mut lines = Vec::new();
        for (index, raw) in reader.lines().enumerate() {
            let raw_line = raw?;
            let content = raw_line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            let line = index + 1;
            edges.push(parse_edge(line, content)?);
            lines.push(line);
        }
        Self::from_parts(name.into(), edges, lines)
    }

    /// Opens and parses the file at `path`, naming the list after it.
    ///
    /// # Errors
    /// Same as [`Self::try_from_reader`], plus [`EdgeListError::Io`] when the
    /// file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::try_from_reader(path.display().to_string(), BufReader::new(file))
    }

    fn from_parts(
        name: String,
        edges: Vec<(usize, usize)>,
        lines: Vec<usize>,
    ) -> Result<Self, EdgeListError> {
        let largest = edges
            .iter()
            .map(|&(u, v)| u.max(v))
            .max()
            .ok_or(EdgeListError::EmptyInput)?;
        let Some(vertex_bound) = largest.checked_add(1) else {
            let line = edges
                .iter()
                .zip(&lines)
                .find_map(|(&(u, v), &line)| (u.max(v) == largest).then_some(line))
                .unwrap_or_default();
            return Err(EdgeListError::VertexIdOverflow {
                line,
                vertex: largest,
            });
        };
        debug!(name = %name, edges = edges.len(), vertex_bound, "parsed edge list");
        Ok(Self {
            name,
            edges,
            lines,
            vertex_bound,
        })
    }

    /// Returns the name the list was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns the number of edges, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false`; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the largest vertex identifier plus one.
    #[must_use]
    pub fn vertex_bound(&self) -> usize {
        self.vertex_bound
    }

    /// Builds a graph with `size` vertices, or [`Self::vertex_bound`] when
    /// `size` is `None`. Duplicate edges and self-loops collapse.
    ///
    /// # Errors
    /// Returns [`EdgeListError::VertexOutOfRange`] when an endpoint is not
    /// below `size`, and [`EdgeListError::Graph`] when `size` is zero or too
    /// large to allocate.
    pub fn into_graph(self, size: Option<usize>) -> Result<Graph, EdgeListError> {
        let size = size.unwrap_or(self.vertex_bound);
        let mut graph = Graph::new(size)?;
        for (&(u, v), &line) in self.edges.iter().zip(&self.lines) {
            if let Some(vertex) = [u, v].into_iter().find(|&vertex| vertex >= size) {
                return Err(EdgeListError::VertexOutOfRange { line, vertex, size });
            }
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}

fn parse_edge(line: usize, content: &str) -> Result<(usize, usize), EdgeListError> {
    let malformed = || EdgeListError::Malformed {
        line,
        content: content.to_owned(),
    };
    let mut tokens = content.split_whitespace();
    let (Some(left), Some(right), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let u = left.parse().map_err(|_| malformed())?;
    let v = right.parse().map_err(|_| malformed())?;
    Ok((u, v))
}
