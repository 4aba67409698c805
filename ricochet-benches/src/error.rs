//! Benchmark setup error type.
//!
//! Lets setup functions propagate fixture and configuration failures with `?`
//! instead of panicking mid-measurement.

use ricochet_core::{GraphError, TraversalError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A fixture topology could not be built.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The traversal could not be configured or the search was rejected.
    #[error("traversal failed: {0}")]
    Traversal(#[from] TraversalError),
}
