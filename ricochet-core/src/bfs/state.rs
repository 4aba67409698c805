//! Shared per-search state written concurrently by frontier processors.
//!
//! Synchronisation is relaxed. `visited` and `predecessors` are
//! fixed-size atomic arrays accessed with [`Ordering::Relaxed`]; the only lock
//! guards appends to the next frontier.
//!
//! Invariants relied upon by the level loop:
//!
//! - A vertex is claimed by exactly one task: the load filters vertices seen in
//!   earlier levels, and `swap(true)` elects a single winner among tasks of the
//!   current level racing for the same neighbour.
//! - Only the claimant writes the predecessor slot, so it is written once and
//!   never overwritten. Any claimant is valid because every vertex of a
//!   frontier sits at the same distance from the source.
//! - A visited flag is never cleared, so the next frontier holds each vertex at
//!   most once and the search terminates.
//! - Writes of one level become visible to the next through the fork-join
//!   barrier and the frontier mutex, which both establish happens-before.

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::graph::Graph;

const NO_PREDECESSOR: usize = usize::MAX;

pub(super) struct SearchState<'g> {
    graph: &'g Graph,
    target: usize,
    visited: Vec<AtomicBool>,
    predecessors: Vec<AtomicUsize>,
    next: Mutex<Vec<usize>>,
    found: AtomicBool,
    forks: AtomicUsize,
}

impl<'g> SearchState<'g> {
    pub(super) fn new(graph: &'g Graph, source: usize, target: usize) -> Self {
        let visited: Vec<AtomicBool> = (0..graph.len()).map(|_| AtomicBool::new(false)).collect();
        let predecessors = (0..graph.len())
            .map(|_| AtomicUsize::new(NO_PREDECESSOR))
            .collect();
        visited[source].store(true, Ordering::Relaxed);
        Self {
            graph,
            target,
            visited,
            predecessors,
            next: Mutex::new(Vec::new()),
            found: AtomicBool::new(false),
            forks: AtomicUsize::new(0),
        }
    }

    pub(super) fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub(super) fn target(&self) -> usize {
        self.target
    }

    /// Marks `vertex` visited on behalf of `discoverer`. Returns `true` for the
    /// single caller that wins the vertex.
    pub(super) fn claim(&self, vertex: usize, discoverer: usize) -> bool {
        let flag = &self.visited[vertex];
        if flag.load(Ordering::Relaxed) || flag.swap(true, Ordering::Relaxed) {
            return false;
        }
        self.predecessors[vertex].store(discoverer, Ordering::Relaxed);
        true
    }

    pub(super) fn mark_found(&self) {
        self.found.store(true, Ordering::Relaxed);
    }

    pub(super) fn found(&self) -> bool {
        self.found.load(Ordering::Relaxed)
    }

    pub(super) fn record_fork(&self) {
        self.forks.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn forks(&self) -> usize {
        self.forks.load(Ordering::Relaxed)
    }

    /// Appends a batch of newly claimed vertices to the next frontier.
    pub(super) fn append(&self, discovered: &[usize]) {
        if discovered.is_empty() {
            return;
        }
        self.next
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(discovered);
    }

    /// Hands over the next frontier, leaving an empty one for the level after.
    pub(super) fn take_next(&self) -> Vec<usize> {
        std::mem::take(&mut *self.next.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(super) fn into_predecessors(self) -> Vec<Option<usize>> {
        self.predecessors
            .into_iter()
            .map(|slot| Some(slot.into_inner()).filter(|&vertex| vertex != NO_PREDECESSOR))
            .collect()
    }
}
