//! Balancing statistics.
//!
//! Counters collected by a single run of the balancing phase.

use std::time::{Duration, Instant};

/// Statistics for one balancing run.
///
/// # Example
///
/// ```
/// use seatforge_solver::BalanceStats;
///
/// let mut stats = BalanceStats::default();
/// stats.start();
/// stats.record_pass();
/// stats.record_swap(true);
/// stats.record_swap(false);
///
/// assert_eq!(stats.passes, 1);
/// assert_eq!(stats.swaps_committed, 1);
/// assert_eq!(stats.swaps_reverted, 1);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalanceStats {
    start_time: Option<Instant>,
    duration: Option<Duration>,
    /// Full passes over the grid.
    pub passes: u32,
    /// Swap candidates returned by the search.
    pub candidates_found: u64,
    /// Tentative swaps kept because they lowered the global imbalance.
    pub swaps_committed: u64,
    /// Tentative swaps undone.
    pub swaps_reverted: u64,
    /// Global imbalance evaluations performed.
    pub global_evaluations: u64,
    /// Global imbalance of the grid handed in.
    pub initial_global_imbalance: f64,
    /// Global imbalance of the grid handed back.
    pub final_global_imbalance: f64,
    /// True if a pass finished without committing a swap.
    pub converged: bool,
}

impl BalanceStats {
    /// Marks the start of balancing.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    /// Marks the end of balancing.
    pub fn finish(&mut self) {
        self.duration = self.start_time.map(|t| t.elapsed());
    }

    /// Returns the time spent balancing, up to now if still running.
    pub fn elapsed(&self) -> Duration {
        self.duration
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    /// Records a completed pass.
    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    /// Records a swap candidate returned by the search.
    pub fn record_candidate(&mut self) {
        self.candidates_found += 1;
    }

    /// Records a tentative swap and whether it was kept.
    pub fn record_swap(&mut self, committed: bool) {
        if committed {
            self.swaps_committed += 1;
        } else {
            self.swaps_reverted += 1;
        }
    }

    /// Records a global imbalance evaluation.
    pub fn record_global_evaluation(&mut self) {
        self.global_evaluations += 1;
    }

    /// Returns committed / tentative swaps.
    pub fn acceptance_rate(&self) -> f64 {
        let tried = self.swaps_committed + self.swaps_reverted;
        if tried == 0 {
            0.0
        } else {
            self.swaps_committed as f64 / tried as f64
        }
    }

    /// Returns how much the global imbalance dropped.
    pub fn improvement(&self) -> f64 {
        self.initial_global_imbalance - self.final_global_imbalance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = BalanceStats::default();
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.acceptance_rate(), 0.0);
        assert_eq!(stats.improvement(), 0.0);
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert!(!stats.converged);
    }

    #[test]
    fn test_improvement() {
        let stats = BalanceStats {
            initial_global_imbalance: 12.5,
            final_global_imbalance: 8.0,
            ..BalanceStats::default()
        };
        assert_eq!(stats.improvement(), 4.5);
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = BalanceStats::default();
        stats.start();
        stats.finish();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
    }
}
