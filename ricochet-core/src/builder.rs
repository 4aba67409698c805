//! Builder utilities for configuring [`Traversal`] instances.
//!
//! Exposes the frontier expansion strategy, the parallel split cutoff and the
//! optional dedicated worker pool, validating all of them before a traversal
//! is constructed.

use std::{num::NonZeroUsize, sync::Arc};

use crate::{Result, bfs::Traversal, error::TraversalError};

/// Frontier slice length at or above which the parallel processor keeps
/// splitting.
pub const DEFAULT_CUTOFF: usize = 600_000;

/// Selects how each BFS level expands its frontier.
///
/// Both strategies produce shortest paths of the same length; they may pick
/// different predecessors when several vertices of one level discover the same
/// neighbour.
///
/// # Examples
/// ```
/// use ricochet_core::ExpansionStrategy;
///
/// assert_eq!(ExpansionStrategy::default(), ExpansionStrategy::Parallel);
/// assert_eq!(ExpansionStrategy::Serial.as_str(), "serial");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpansionStrategy {
    /// Expand the frontier on the calling thread.
    Serial,
    /// Recursively bisect the frontier and expand both halves as a fork-join
    /// pair until slices fall below the cutoff.
    #[default]
    Parallel,
}

impl ExpansionStrategy {
    /// Returns the lowercase name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

/// Configures and constructs [`Traversal`] instances.
///
/// # Examples
/// ```
/// use ricochet_core::{ExpansionStrategy, TraversalBuilder};
///
/// let traversal = TraversalBuilder::new()
///     .with_strategy(ExpansionStrategy::Parallel)
///     .with_cutoff(64)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(traversal.cutoff().get(), 64);
/// assert_eq!(traversal.strategy(), ExpansionStrategy::Parallel);
/// ```
#[derive(Debug, Clone)]
pub struct TraversalBuilder {
    strategy: ExpansionStrategy,
    cutoff: usize,
    threads: Option<usize>,
}

impl Default for TraversalBuilder {
    fn default() -> Self {
        Self {
            strategy: ExpansionStrategy::default(),
            cutoff: DEFAULT_CUTOFF,
            threads: None,
        }
    }
}

impl TraversalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::{DEFAULT_CUTOFF, ExpansionStrategy, TraversalBuilder};
    ///
    /// let builder = TraversalBuilder::new();
    /// assert_eq!(builder.cutoff(), DEFAULT_CUTOFF);
    /// assert_eq!(builder.strategy(), ExpansionStrategy::Parallel);
    /// assert_eq!(builder.threads(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frontier expansion strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ExpansionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured expansion strategy.
    #[must_use]
    pub fn strategy(&self) -> ExpansionStrategy {
        self.strategy
    }

    /// Overrides the slice length below which parallel expansion stops
    /// splitting and runs serially.
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::TraversalBuilder;
    ///
    /// let builder = TraversalBuilder::new().with_cutoff(2);
    /// assert_eq!(builder.cutoff(), 2);
    /// ```
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Returns the configured cutoff.
    #[must_use]
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Runs searches on a dedicated pool of `threads` workers instead of the
    /// global rayon pool. `None` restores the global pool.
    #[must_use]
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the configured dedicated worker count, if any.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`Traversal`].
    ///
    /// # Errors
    /// Returns [`TraversalError::InvalidCutoff`] for a zero cutoff,
    /// [`TraversalError::InvalidThreadCount`] for a zero-sized pool and
    /// [`TraversalError::ThreadPool`] when the pool cannot be started.
    ///
    /// # Examples
    /// ```
    /// use ricochet_core::{TraversalBuilder, TraversalError};
    ///
    /// let err = TraversalBuilder::new().with_cutoff(0).build().unwrap_err();
    /// assert!(matches!(err, TraversalError::InvalidCutoff { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Traversal> {
        let cutoff = NonZeroUsize::new(self.cutoff)
            .ok_or(TraversalError::InvalidCutoff { got: self.cutoff })?;

        let pool = match self.threads {
            None => None,
            Some(threads) => {
                if threads == 0 {
                    return Err(TraversalError::InvalidThreadCount { got: threads });
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("ricochet-bfs-{index}"))
                    .build()
                    .map_err(|error| TraversalError::ThreadPool {
                        message: Arc::from(error.to_string()),
                    })?;
                Some(Arc::new(pool))
            }
        };

        Ok(Traversal::new(self.strategy, cutoff, pool))
    }
}
