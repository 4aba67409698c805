//! Fork-join frontier expansion.

use super::{serial, state::SearchState};

/// Recursively bisects `slice` and expands both halves with [`rayon::join`].
///
/// Slices shorter than `cutoff` are handed to the serial processor. Slices of
/// a single vertex are never split further, so any cutoff terminates. The call
/// returns only after both halves, and everything they spawned, have finished.
pub(super) fn expand(state: &SearchState<'_>, slice: &[usize], cutoff: usize) {
    if slice.len() < cutoff || slice.len() < 2 {
        serial::expand(state, slice);
        return;
    }
    state.record_fork();
    let (left, right) = slice.split_at(slice.len() / 2);
    rayon::join(
        || expand(state, left, cutoff),
        || expand(state, right, cutoff),
    );
}
