//! Error types for the Ricochet core library.
//!
//! Precondition failures raised by the adjacency store and the traversal
//! engine, each carrying a stable machine-readable code. An unreachable
//! target is not an error; see [`crate::SearchOutcome::NotFound`].

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The requested vertex count cannot back a graph.
    #[error("graph size must be at least 1 (got {got})")]
    InvalidSize {
        /// The rejected vertex count.
        got: usize,
    },
    /// A vertex identifier fell outside `[0, size)`.
    #[error("vertex {vertex} is out of range for a graph of {size} vertices")]
    OutOfRange {
        /// The offending vertex identifier.
        vertex: usize,
        /// Number of vertices in the graph.
        size: usize,
    },
    /// A generated topology has more vertices than `usize` can count.
    #[error("vertex count of a {dimensions}-dimensional topology overflows usize")]
    SizeOverflow {
        /// Number of axes requested.
        dimensions: usize,
    },
    /// The adjacency table for the requested vertex count could not be allocated.
    #[error("cannot allocate adjacency for {size} vertices")]
    CapacityExceeded {
        /// The rejected vertex count.
        size: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The requested vertex count cannot back a graph.
        InvalidSize => InvalidSize { .. } => "GRAPH_INVALID_SIZE",
        /// A vertex identifier fell outside the graph.
        OutOfRange => OutOfRange { .. } => "GRAPH_OUT_OF_RANGE",
        /// A generated topology has more vertices than `usize` can count.
        SizeOverflow => SizeOverflow { .. } => "GRAPH_SIZE_OVERFLOW",
        /// The adjacency table could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
    }
}

/// Error type produced when configuring or running a [`crate::Traversal`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TraversalError {
    /// The parallel split cutoff must be positive.
    #[error("cutoff must be at least 1 (got {got})")]
    InvalidCutoff {
        /// The rejected cutoff.
        got: usize,
    },
    /// A dedicated thread pool needs at least one worker.
    #[error("thread count must be at least 1 (got {got})")]
    InvalidThreadCount {
        /// The rejected worker count.
        got: usize,
    },
    /// The dedicated thread pool could not be started.
    #[error("failed to build thread pool: {message}")]
    ThreadPool {
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
    /// The graph rejected a vertex supplied to the search.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`TraversalError`] variants.
    enum TraversalErrorCode for TraversalError {
        /// The parallel split cutoff must be positive.
        InvalidCutoff => InvalidCutoff { .. } => "TRAVERSAL_INVALID_CUTOFF",
        /// A dedicated thread pool needs at least one worker.
        InvalidThreadCount => InvalidThreadCount { .. } => "TRAVERSAL_INVALID_THREAD_COUNT",
        /// The dedicated thread pool could not be started.
        ThreadPool => ThreadPool { .. } => "TRAVERSAL_THREAD_POOL",
        /// The graph rejected a vertex supplied to the search.
        GraphFailure => Graph(..) => "TRAVERSAL_GRAPH_FAILURE",
    }
}

impl TraversalError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a [`crate::Graph`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the traversal API.
pub type Result<T> = core::result::Result<T, TraversalError>;
