//! Seeded random graphs for benchmarking.
//!
//! [`random_graph`] grows a random recursive tree, so every vertex is
//! reachable from `0` within a few levels, then sprinkles extra edges on top.
//! The frontier widens quickly, which is the case the fork-join expansion
//! targets.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use ricochet_core::{Graph, GraphError};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was below two.
    #[error("vertex count must be at least 2 (got {got})")]
    TooFewVertices {
        /// The rejected vertex count.
        got: usize,
    },
    /// The graph rejected an edge or size.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for random graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected random graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when `vertex_count < 2`.
///
/// # Examples
/// ```
/// use ricochet_benches::source::{SyntheticConfig, random_graph};
///
/// let config = SyntheticConfig { vertex_count: 100, extra_edges_per_vertex: 2, seed: 7 };
/// let graph = random_graph(&config).expect("valid config");
/// assert_eq!(graph.len(), 100);
/// assert!(graph.edge_count() >= 99);
/// ```
pub fn random_graph(config: &SyntheticConfig) -> Result<Graph, SyntheticError> {
    let vertex_count = config.vertex_count;
    if vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices { got: vertex_count });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(vertex_count)?;
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        graph.add_edge(parent, vertex)?;
    }

    let extra = vertex_count.saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

/// Returns the last vertex identifier, the search target used against
/// [`random_graph`] fixtures. Tree depth grows with the identifier, so this
/// vertex tends to sit deep.
#[must_use]
pub const fn far_target(graph_len: usize) -> usize {
    graph_len.saturating_sub(1)
}
