//! Command-line interface for shortest-path queries.
//!
//! `ricochet path` loads a graph from an edge-list file or builds a demo
//! topology, then runs the breadth-first search between two vertices.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgesArgs, GraphSource, HypercubeArgs, LatticeArgs, PathCommand,
    PathSummary, StrategyArg, render_summary, run_cli,
};
