//! Benchmark support crate for ricochet.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks comparing serial and fork-join frontier expansion.

pub mod error;
pub mod params;
pub mod source;
