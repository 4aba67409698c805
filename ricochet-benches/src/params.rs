//! Benchmark parameter types rendered into Criterion benchmark ids.

use std::fmt;

/// Parameters for one search benchmark run.
#[derive(Clone, Debug)]
pub struct SearchBenchParams {
    /// Number of vertices in the searched graph.
    pub vertex_count: usize,
    /// Expansion strategy label, `serial` or `parallel`.
    pub strategy: &'static str,
    /// Parallel split cutoff; ignored by the serial strategy.
    pub cutoff: usize,
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strategy == "serial" {
            write!(f, "n={},serial", self.vertex_count)
        } else {
            write!(
                f,
                "n={},{},cutoff={}",
                self.vertex_count, self.strategy, self.cutoff
            )
        }
    }
}
