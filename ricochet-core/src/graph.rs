//! Adjacency store for undirected, unweighted state graphs.
//!
//! The vertex universe is fixed when the graph is constructed. Edges are kept
//! symmetric: every insertion and removal touches both endpoints.

use std::collections::BTreeSet;

use crate::error::GraphError;

/// Undirected graph over the vertices `[0, len)`.
///
/// Each vertex owns an ordered neighbour set, so neighbour enumeration is
/// deterministic and duplicates are impossible. Self-loops are never stored.
///
/// # Examples
/// ```
/// use ricochet_core::Graph;
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// assert!(graph.contains_edge(1, 0)?);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), ricochet_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    neighbours: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Allocates a graph with `size` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] when `size` is zero; a graph with no
    /// vertices cannot host a search. Returns [`GraphError::CapacityExceeded`]
    /// when the adjacency table for `size` vertices cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::{Graph, GraphError};
    ///
    /// assert_eq!(Graph::new(4)?.len(), 4);
    /// assert!(matches!(Graph::new(0), Err(GraphError::InvalidSize { got: 0 })));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(size: usize) -> Result<Self, GraphError> {
        if size == 0 {
            return Err(GraphError::InvalidSize { got: size });
        }
        let mut neighbours = Vec::new();
        neighbours
            .try_reserve_exact(size)
            .map_err(|_| GraphError::CapacityExceeded { size })?;
        neighbours.resize_with(size, BTreeSet::new);
        Ok(Self {
            neighbours,
            edge_count: 0,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns whether the graph has no vertices. Always `false` for graphs
    /// built through [`Graph::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Connects `u` and `v`. Adding an existing edge or a self-loop leaves the
    /// graph unchanged.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either endpoint is not a vertex.
    /// The graph is not modified in that case.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Ok(());
        }
        let inserted = self.set_mut(u).insert(v);
        self.set_mut(v).insert(u);
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Disconnects `u` and `v`. Removing an absent edge or a self-loop is a
    /// no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either endpoint is not a vertex.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Ok(());
        }
        let removed = self.set_mut(u).remove(&v);
        self.set_mut(v).remove(&u);
        if removed {
            self.edge_count -= 1;
        }
        Ok(())
    }

    /// Returns the neighbour set of `u`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `u` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::Graph;
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 2)?;
    /// graph.add_edge(0, 1)?;
    /// let order: Vec<usize> = graph.neighbors(0)?.iter().copied().collect();
    /// assert_eq!(order, [1, 2]);
    /// # Ok::<(), ricochet_core::GraphError>(())
    /// ```
    pub fn neighbors(&self, u: usize) -> Result<&BTreeSet<usize>, GraphError> {
        self.neighbours.get(u).ok_or(GraphError::OutOfRange {
            vertex: u,
            size: self.len(),
        })
    }

    /// Returns the number of neighbours of `u`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `u` is not a vertex.
    pub fn degree(&self, u: usize) -> Result<usize, GraphError> {
        self.neighbors(u).map(BTreeSet::len)
    }

    /// Returns whether `u` and `v` are adjacent.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either endpoint is not a vertex.
    pub fn contains_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(v)?;
        Ok(self.neighbors(u)?.contains(&v))
    }

    /// Fails with [`GraphError::OutOfRange`] unless `vertex` lies in `[0, len)`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] for identifiers beyond the graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                size: self.len(),
            })
        }
    }

    /// Neighbour set lookup for identifiers already validated by the caller.
    /// Traversal code only ever holds vertices taken from this graph.
    pub(crate) fn adjacent(&self, u: usize) -> &BTreeSet<usize> {
        &self.neighbours[u]
    }

    fn set_mut(&mut self, u: usize) -> &mut BTreeSet<usize> {
        &mut self.neighbours[u]
    }
}
