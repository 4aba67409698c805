//! Ricochet core library.
//!
//! Shortest paths over unweighted, undirected state graphs such as the move
//! graph of an N-dimensional Ricochet Robots board. A [`Graph`] holds the fixed
//! vertex set and a symmetric neighbour relation; a [`Traversal`] runs a
//! level-synchronous breadth-first search over it, expanding each frontier
//! either serially or as a fork-join split across rayon workers.
//!
//! ```
//! use ricochet_core::{ExpansionStrategy, TraversalBuilder, topology};
//!
//! let grid = topology::grid(3, 3)?;
//! let traversal = TraversalBuilder::new()
//!     .with_strategy(ExpansionStrategy::Parallel)
//!     .with_cutoff(2)
//!     .build()?;
//! let outcome = traversal.search(&grid, 0, 8)?;
//! assert_eq!(outcome.distance(), Some(4));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bfs;
mod builder;
mod error;
mod graph;
mod outcome;
pub mod topology;

#[cfg(test)]
mod test_utils;

pub use crate::{
    bfs::Traversal,
    builder::{DEFAULT_CUTOFF, ExpansionStrategy, TraversalBuilder},
    error::{GraphError, GraphErrorCode, Result, TraversalError, TraversalErrorCode},
    graph::Graph,
    outcome::{PredecessorMap, SearchOutcome, SearchStats, reconstruct_path},
};
