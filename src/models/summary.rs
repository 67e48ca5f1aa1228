//! Run summary model

use serde::Serialize;

use super::CheckResult;

/// Aggregated outcome of one validation run
///
/// Counts and the failed subsequence are derived from `results` at
/// construction, so `total == results.len()`, `failed == failed_results.len()`
/// and `passed == (failed == 0)` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// True when no check failed
    pub passed: bool,
    /// Number of checks that ran
    pub total: usize,
    /// Number of checks that failed
    pub failed: usize,
    /// Every result, in execution order
    pub results: Vec<CheckResult>,
    /// Failing results, in execution order
    pub failed_results: Vec<CheckResult>,
}

impl RunSummary {
    /// Build a summary from results in execution order
    #[must_use]
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let failed_results: Vec<CheckResult> =
            results.iter().filter(|r| !r.passed).cloned().collect();
        let failed = failed_results.len();

        Self {
            passed: failed == 0,
            total: results.len(),
            failed,
            results,
            failed_results,
        }
    }

    /// Number of checks that passed
    #[must_use]
    pub const fn passed_count(&self) -> usize {
        self.total - self.failed
    }
}
