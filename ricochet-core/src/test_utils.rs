//! Shared test utilities for `ricochet-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use ricochet_test_support::proptest_profile::ProptestRunProfile;

use crate::{graph::Graph, outcome::SearchOutcome};

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        max_shrink_iters: profile.max_shrink_iters(),
        ..ProptestConfig::default()
    }
}

/// Plain single-threaded BFS used as the oracle for distance checks.
#[must_use]
pub(crate) fn reference_distance(graph: &Graph, source: usize, target: usize) -> Option<usize> {
    let mut distance = vec![None; graph.len()];
    distance[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(vertex) = queue.pop_front() {
        let here = distance[vertex]?;
        if vertex == target {
            return Some(here);
        }
        for &neighbour in graph.adjacent(vertex) {
            if distance[neighbour].is_none() {
                distance[neighbour] = Some(here + 1);
                queue.push_back(neighbour);
            }
        }
    }
    None
}

/// Checks that a found outcome describes a walk along real edges from source
/// to target and returns its length.
pub(crate) fn checked_distance(
    graph: &Graph,
    outcome: &SearchOutcome,
    source: usize,
    target: usize,
) -> Result<Option<usize>, String> {
    let Some(path) = outcome.path() else {
        return if outcome.is_found() {
            Err("found outcome has no reconstructible path".to_owned())
        } else {
            Ok(None)
        };
    };
    if path.first() != Some(&source) || path.last() != Some(&target) {
        return Err(format!("path {path:?} does not join {source} to {target}"));
    }
    for step in path.windows(2) {
        if let [from, to] = step {
            if !graph.adjacent(*from).contains(to) {
                return Err(format!("path step {from} -> {to} is not an edge"));
            }
        }
    }
    Ok(Some(path.len() - 1))
}
