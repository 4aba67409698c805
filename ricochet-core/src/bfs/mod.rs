//! Level-synchronous breadth-first search.
//!
//! Each iteration expands the whole current frontier, with either the serial or
//! the fork-join processor, before the next frontier is promoted. Levels are
//! therefore processed in strictly increasing distance from the source, which
//! is what makes the first level that touches the target yield a shortest path.

mod parallel;
mod serial;
mod state;

#[cfg(test)]
mod property;

use std::{num::NonZeroUsize, sync::Arc};

use rayon::ThreadPool;
use tracing::{debug, info, instrument};

use crate::{
    Result,
    builder::ExpansionStrategy,
    graph::Graph,
    outcome::{PredecessorMap, SearchOutcome, SearchStats},
};

use self::state::SearchState;

/// Shortest-path engine over a borrowed [`Graph`].
///
/// Built through [`crate::TraversalBuilder`]. A traversal is cheap to clone and
/// can run any number of searches; each search allocates its own state and
/// never mutates the graph.
///
/// # Examples
/// ```
/// use ricochet_core::{ExpansionStrategy, Graph, TraversalBuilder};
///
/// let mut graph = Graph::new(4)?;
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     graph.add_edge(u, v)?;
/// }
/// let traversal = TraversalBuilder::new()
///     .with_strategy(ExpansionStrategy::Serial)
///     .build()?;
/// let outcome = traversal.search(&graph, 0, 2)?;
/// assert_eq!(outcome.distance(), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Traversal {
    strategy: ExpansionStrategy,
    cutoff: NonZeroUsize,
    pool: Option<Arc<ThreadPool>>,
}

impl Traversal {
    pub(crate) fn new(
        strategy: ExpansionStrategy,
        cutoff: NonZeroUsize,
        pool: Option<Arc<ThreadPool>>,
    ) -> Self {
        Self {
            strategy,
            cutoff,
            pool,
        }
    }

    /// Returns the default expansion strategy used by [`Self::search`].
    #[must_use]
    pub fn strategy(&self) -> ExpansionStrategy {
        self.strategy
    }

    /// Returns the slice length below which parallel expansion runs serially.
    #[must_use]
    pub fn cutoff(&self) -> NonZeroUsize {
        self.cutoff
    }

    /// Returns the size of the dedicated worker pool, or `None` when searches
    /// run on the global rayon pool.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        self.pool.as_ref().map(|pool| pool.current_num_threads())
    }

    /// Searches for a shortest path from `source` to `target` using the
    /// configured strategy.
    ///
    /// # Errors
    /// Returns [`crate::TraversalError::Graph`] wrapping
    /// [`crate::GraphError::OutOfRange`] when either vertex is not part of
    /// `graph`. An unreachable target is reported as
    /// [`SearchOutcome::NotFound`].
    pub fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchOutcome> {
        self.search_with(graph, source, target, self.strategy)
    }

    /// Searches for a shortest path with an explicit expansion strategy,
    /// overriding the configured one for this call.
    ///
    /// # Errors
    /// Same as [`Self::search`].
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::{ExpansionStrategy, Graph, TraversalBuilder};
    ///
    /// let mut graph = Graph::new(4)?;
    /// graph.add_edge(0, 1)?;
    /// graph.add_edge(2, 3)?;
    /// let traversal = TraversalBuilder::new().with_cutoff(1).build()?;
    /// let outcome = traversal.search_with(&graph, 0, 3, ExpansionStrategy::Parallel)?;
    /// assert!(!outcome.is_found());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "core.search",
        err,
        skip(self, graph, strategy),
        fields(
            vertices = graph.len(),
            edges = graph.edge_count(),
            strategy = strategy.as_str(),
            cutoff = self.cutoff.get(),
        ),
    )]
    pub fn search_with(
        &self,
        graph: &Graph,
        source: usize,
        target: usize,
        strategy: ExpansionStrategy,
    ) -> Result<SearchOutcome> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;

        if source == target {
            debug!("source equals target, returning empty path");
            return Ok(SearchOutcome::Found {
                predecessors: PredecessorMap::new(source, target, vec![None; graph.len()]),
                stats: SearchStats::default(),
            });
        }

        let outcome = match &self.pool {
            Some(pool) => pool.install(|| self.run(graph, source, target, strategy)),
            None => self.run(graph, source, target, strategy),
        };
        Ok(outcome)
    }

    fn run(
        &self,
        graph: &Graph,
        source: usize,
        target: usize,
        strategy: ExpansionStrategy,
    ) -> SearchOutcome {
        let state = SearchState::new(graph, source, target);
        let mut frontier = vec![source];
        let mut stats = SearchStats::default();

        while !frontier.is_empty() {
            stats.levels += 1;
            debug!(
                depth = stats.levels,
                frontier = frontier.len(),
                "expanding level"
            );
            match strategy {
                ExpansionStrategy::Serial => serial::expand(&state, &frontier),
                ExpansionStrategy::Parallel => {
                    parallel::expand(&state, &frontier, self.cutoff.get());
                }
            }

            // Every task of this level has joined; the frontier is complete.
            frontier = state.take_next();
            stats.discovered += frontier.len();

            if state.found() {
                stats.forks = state.forks();
                info!(
                    distance = stats.levels,
                    discovered = stats.discovered,
                    forks = stats.forks,
                    "target reached"
                );
                return SearchOutcome::Found {
                    predecessors: PredecessorMap::new(source, target, state.into_predecessors()),
                    stats,
                };
            }
        }

        stats.forks = state.forks();
        info!(
            levels = stats.levels,
            discovered = stats.discovered,
            "frontier exhausted, target unreachable"
        );
        SearchOutcome::NotFound { stats }
    }
}
