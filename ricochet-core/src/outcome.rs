//! Search results and shortest-path reconstruction.

/// Counters describing the work performed by a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of BFS levels whose frontier was expanded.
    pub levels: usize,
    /// Number of vertices claimed, excluding the source.
    pub discovered: usize,
    /// Number of fork-join splits performed by the parallel processor.
    pub forks: usize,
}

/// Per-vertex discoverers recorded by a successful search.
///
/// Following predecessors from the target reaches the source along a shortest
/// path. Vertices that were never discovered, and the source itself, have no
/// predecessor.
///
/// # Examples
/// ```
/// use ricochet_core::PredecessorMap;
///
/// let map = PredecessorMap::new(0, 3, vec![None, Some(0), Some(1), Some(2)]);
/// assert_eq!(map.path(), Some(vec![0, 1, 2, 3]));
/// assert_eq!(map.distance(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    source: usize,
    target: usize,
    predecessors: Vec<Option<usize>>,
}

impl PredecessorMap {
    /// Wraps a raw predecessor table recorded while searching from `source`
    /// towards `target`.
    #[must_use]
    pub fn new(source: usize, target: usize, predecessors: Vec<Option<usize>>) -> Self {
        Self {
            source,
            target,
            predecessors,
        }
    }

    /// Returns the vertex the search started from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the vertex the search looked for.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the vertex that discovered `vertex`, if any.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Returns the raw predecessor table indexed by vertex.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Rebuilds the forward path from source to target.
    ///
    /// Returns `None` only when the table does not link the target back to the
    /// source, which a completed search never produces.
    #[must_use]
    pub fn path(&self) -> Option<Vec<usize>> {
        reconstruct_path(&self.predecessors, self.source, self.target)
    }

    /// Returns the number of edges on the shortest path.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }
}

/// Result of a breadth-first search.
///
/// An unreachable target is a legitimate answer, reported as
/// [`SearchOutcome::NotFound`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target was reached; the map reconstructs a shortest path.
    Found {
        /// Discoverer table for the levels expanded before the target was seen.
        predecessors: PredecessorMap,
        /// Work counters for the search.
        stats: SearchStats,
    },
    /// The frontier was exhausted without reaching the target.
    NotFound {
        /// Work counters for the search.
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// Returns the predecessor map when the target was reached.
    #[must_use]
    pub fn predecessors(&self) -> Option<&PredecessorMap> {
        match self {
            Self::Found { predecessors, .. } => Some(predecessors),
            Self::NotFound { .. } => None,
        }
    }

    /// Returns the shortest path when the target was reached.
    #[must_use]
    pub fn path(&self) -> Option<Vec<usize>> {
        self.predecessors().and_then(PredecessorMap::path)
    }

    /// Returns the shortest-path length when the target was reached.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.predecessors().and_then(PredecessorMap::distance)
    }

    /// Returns whether the target was reached.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the work counters regardless of outcome.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found { stats, .. } | Self::NotFound { stats } => *stats,
        }
    }
}

/// Walks `predecessors` from `target` back to `source` and returns the forward
/// path.
///
/// Returns `None` when the chain breaks before reaching `source`, leaves the
/// table, or revisits a vertex.
///
/// # Examples
/// ```
/// use ricochet_core::reconstruct_path;
///
/// let table = [None, Some(0), Some(0), Some(2)];
/// assert_eq!(reconstruct_path(&table, 0, 3), Some(vec![0, 2, 3]));
/// assert_eq!(reconstruct_path(&table, 0, 0), Some(vec![0]));
/// assert_eq!(reconstruct_path(&table, 1, 3), None);
/// ```
#[must_use]
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current).copied().flatten()?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
