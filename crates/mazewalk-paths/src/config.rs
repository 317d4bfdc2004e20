use std::time::Duration;

/// Tuning knobs for [`solve`](crate::solve) and the longest-path search.
///
/// The shortest-path search always runs to completion and ignores the
/// budget fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Skip branches whose reachable area cannot beat the best path so far.
    /// Results are identical either way; only the running time changes.
    pub prune: bool,
    /// Stop after this many search-loop iterations. A parallel search spends
    /// one budget across all of its workers.
    pub max_iterations: Option<u64>,
    /// Stop once this much time has passed since the search started.
    pub timeout: Option<Duration>,
    /// Explore each first move from the entrance on its own worker.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prune: true,
            max_iterations: None,
            timeout: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Set the iteration budget (builder).
    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Set the time budget (builder).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable pruning (builder).
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enable or disable per-first-move workers (builder).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
