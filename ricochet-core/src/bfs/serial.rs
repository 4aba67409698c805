//! Sequential frontier expansion.

use super::state::SearchState;

/// Expands every vertex of `slice` on the calling thread.
///
/// Newly claimed neighbours are buffered locally and appended to the next
/// frontier under a single lock acquisition. Seeing the target only raises the
/// level's `found` flag; the rest of the slice is still expanded.
pub(super) fn expand(state: &SearchState<'_>, slice: &[usize]) {
    let graph = state.graph();
    let target = state.target();
    let mut discovered = Vec::new();
    for &vertex in slice {
        for &neighbour in graph.adjacent(vertex) {
            if state.claim(neighbour, vertex) {
                discovered.push(neighbour);
            }
            if neighbour == target {
                state.mark_found();
            }
        }
    }
    state.append(&discovered);
}
