//! Type definitions for BFS property-based tests.

use crate::graph::Graph;

/// Shape of a generated graph.
///
/// Each shape stresses a different part of the traversal: wide frontiers
/// drive the fork-join split, sparse and disconnected graphs exercise
/// `NotFound`, and lattices have many equal-length paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Shape {
    /// Random graph with roughly two edges per vertex.
    Sparse,
    /// Random graph with a high edge probability.
    Dense,
    /// Two random components with no edge between them.
    Disconnected,
    /// Regular grid with random side lengths.
    Lattice,
    /// Hub vertices fanning out to a wide middle layer, so one level holds
    /// most of the graph.
    Fan,
}

/// Generated graph plus the query to run on it.
#[derive(Clone, Debug)]
pub(super) struct BfsFixture {
    /// Graph under test.
    pub graph: Graph,
    /// Search start vertex.
    pub source: usize,
    /// Search goal vertex.
    pub target: usize,
    /// Shape used during generation, kept for failure messages.
    pub shape: Shape,
}
