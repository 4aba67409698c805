//! Property-based tests for the level-synchronous BFS.
//!
//! Checks every strategy against a plain sequential BFS oracle and checks that
//! serial and fork-join expansion agree on distances across cutoffs and
//! repeated runs, over randomly generated topologies.

mod properties;
mod strategies;
mod types;
