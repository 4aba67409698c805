//! Property runners shared by the proptest and rstest suites.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    ExpansionStrategy, SearchOutcome, TraversalBuilder,
    test_utils::{checked_distance, reference_distance},
};

use super::types::BfsFixture;

/// Cutoffs exercised by the parallel strategy; `1` splits down to single
/// vertices.
const CUTOFFS: &[usize] = &[1, 2, 3, 8, 1_000];

/// Number of times each parallel configuration is re-run on the same fixture.
const REPETITIONS: usize = 4;

fn search(
    fixture: &BfsFixture,
    strategy: ExpansionStrategy,
    cutoff: usize,
) -> Result<SearchOutcome, TestCaseError> {
    let traversal = TraversalBuilder::new()
        .with_strategy(strategy)
        .with_cutoff(cutoff)
        .build()
        .map_err(|err| TestCaseError::fail(format!("builder rejected cutoff {cutoff}: {err}")))?;
    traversal
        .search(&fixture.graph, fixture.source, fixture.target)
        .map_err(|err| {
            TestCaseError::fail(format!(
                "search failed: {err} (shape={:?}, vertices={}, query={}->{})",
                fixture.shape,
                fixture.graph.len(),
                fixture.source,
                fixture.target,
            ))
        })
}

fn measured_distance(
    fixture: &BfsFixture,
    strategy: ExpansionStrategy,
    cutoff: usize,
) -> Result<Option<usize>, TestCaseError> {
    let outcome = search(fixture, strategy, cutoff)?;
    checked_distance(&fixture.graph, &outcome, fixture.source, fixture.target).map_err(|reason| {
        TestCaseError::fail(format!(
            "{reason} (strategy={}, cutoff={cutoff}, shape={:?})",
            strategy.as_str(),
            fixture.shape,
        ))
    })
}

/// Every strategy and cutoff reports the oracle's shortest distance, or
/// `NotFound` exactly when the oracle finds no path.
pub(super) fn run_oracle_equivalence_property(fixture: &BfsFixture) -> TestCaseResult {
    let expected = reference_distance(&fixture.graph, fixture.source, fixture.target);

    let serial = measured_distance(fixture, ExpansionStrategy::Serial, 1)?;
    if serial != expected {
        return Err(TestCaseError::fail(format!(
            "serial distance {serial:?} != oracle {expected:?} (shape={:?}, query={}->{})",
            fixture.shape, fixture.source, fixture.target,
        )));
    }

    for &cutoff in CUTOFFS {
        let parallel = measured_distance(fixture, ExpansionStrategy::Parallel, cutoff)?;
        if parallel != expected {
            return Err(TestCaseError::fail(format!(
                "parallel distance {parallel:?} != oracle {expected:?} \
                 (cutoff={cutoff}, shape={:?}, query={}->{})",
                fixture.shape, fixture.source, fixture.target,
            )));
        }
    }
    Ok(())
}

/// Repeated parallel runs agree with the serial distance even though the
/// chosen predecessors may differ between runs.
pub(super) fn run_strategy_agreement_property(fixture: &BfsFixture) -> TestCaseResult {
    let baseline = measured_distance(fixture, ExpansionStrategy::Serial, 1)?;
    for run in 0..REPETITIONS {
        for &cutoff in CUTOFFS {
            let parallel = measured_distance(fixture, ExpansionStrategy::Parallel, cutoff)?;
            if parallel != baseline {
                return Err(TestCaseError::fail(format!(
                    "run {run}: parallel distance {parallel:?} diverged from serial \
                     {baseline:?} (cutoff={cutoff}, shape={:?})",
                    fixture.shape,
                )));
            }
        }
    }
    Ok(())
}

/// Discovered vertices never exceed the graph and the frontier never revisits
/// the source.
pub(super) fn run_stats_bounds_property(fixture: &BfsFixture) -> TestCaseResult {
    let outcome = search(fixture, ExpansionStrategy::Parallel, 1)?;
    let stats = outcome.stats();
    if stats.discovered >= fixture.graph.len() && fixture.source != fixture.target {
        return Err(TestCaseError::fail(format!(
            "discovered {} vertices in a graph of {} (shape={:?})",
            stats.discovered,
            fixture.graph.len(),
            fixture.shape,
        )));
    }
    if let Some(map) = outcome.predecessors() {
        if map.predecessor(fixture.source).is_some() {
            return Err(TestCaseError::fail(format!(
                "source {} was given a predecessor (shape={:?})",
                fixture.source, fixture.shape,
            )));
        }
    }
    Ok(())
}
