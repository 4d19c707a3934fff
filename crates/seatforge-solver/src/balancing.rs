//! Balancing phase.
//!
//! First-improvement hill climbing over seat swaps. Each pass visits every
//! occupied seat in row-major order, asks the swap search for a candidate,
//! applies the swap tentatively and keeps it only if the global imbalance
//! drops by more than [`EPSILON`]; otherwise the swap is undone at once.
//!
//! The run stops after a pass that keeps no swap, or after
//! `max_iterations` passes. The global imbalance of the grid never
//! increases. There is no optimality guarantee.

use seatforge_config::{BalancingConfig, DEFAULT_LOCAL_IMBALANCE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use seatforge_core::{Position, SeatGrid};
use tracing::{debug, info, trace};

use crate::imbalance::global_imbalance;
use crate::stats::BalanceStats;
use crate::swap::{search_swap_candidate, EPSILON};

/// Hill-climbing balancing phase.
///
/// # Example
///
/// ```
/// use seatforge_core::{Position, ScoredStudent, SeatGrid, Student};
/// use seatforge_solver::{global_imbalance, BalancingPhase};
///
/// let mut grid = SeatGrid::new(1, 4);
/// for (col, score) in [1.0, 1.0, 9.0, 9.0].into_iter().enumerate() {
///     let student = Student::new(format!("s{col}"), 0.0, 0.0, 0.0, 0.0);
///     grid[Position::new(0, col)] = Some(ScoredStudent::with_score(student, score));
/// }
/// let before = global_imbalance(&grid);
///
/// let stats = BalancingPhase::default().solve(&mut grid);
///
/// assert!(global_imbalance(&grid) <= before);
/// assert!(stats.passes <= 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BalancingPhase {
    max_iterations: u32,
    local_imbalance_threshold: f64,
}

impl Default for BalancingPhase {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS, DEFAULT_LOCAL_IMBALANCE_THRESHOLD)
    }
}

impl BalancingPhase {
    /// Creates a new balancing phase.
    pub fn new(max_iterations: u32, local_imbalance_threshold: f64) -> Self {
        Self {
            max_iterations,
            local_imbalance_threshold,
        }
    }

    /// Creates a balancing phase from configuration.
    pub fn from_config(config: &BalancingConfig) -> Self {
        Self::new(config.max_iterations, config.local_imbalance_threshold)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn local_imbalance_threshold(&self) -> f64 {
        self.local_imbalance_threshold
    }

    /// Balances the grid in place.
    pub fn solve<S>(&self, grid: &mut SeatGrid<S>) -> BalanceStats {
        let mut stats = BalanceStats::default();
        stats.start();

        let initial = global_imbalance(grid);
        stats.record_global_evaluation();
        stats.initial_global_imbalance = initial;
        let mut current = initial;

        info!(
            event = "balance_start",
            seats = grid.capacity(),
            occupied = grid.occupied_count(),
            max_iterations = self.max_iterations,
            threshold = self.local_imbalance_threshold,
            global_imbalance = initial,
        );

        for pass in 0..self.max_iterations {
            let mut baseline = global_imbalance(grid);
            stats.record_global_evaluation();
            let mut improved = false;
            let mut committed = 0u64;
            let mut reverted = 0u64;

            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let from = Position::new(row, col);
                    if !grid.is_occupied(from) {
                        continue;
                    }

                    let Some(candidate) =
                        search_swap_candidate(grid, from, self.local_imbalance_threshold)
                    else {
                        continue;
                    };
                    stats.record_candidate();
                    let to = candidate.position;

                    grid.swap(from, to);
                    let new_global = global_imbalance(grid);
                    stats.record_global_evaluation();

                    let accepted = new_global + EPSILON < baseline;
                    trace!(
                        event = "swap",
                        pass,
                        from = %from,
                        to = %to,
                        local_improvement = candidate.improvement,
                        baseline,
                        new_global,
                        accepted,
                    );

                    if accepted {
                        baseline = new_global;
                        improved = true;
                        committed += 1;
                    } else {
                        grid.swap(from, to);
                        reverted += 1;
                    }
                    stats.record_swap(accepted);
                }
            }

            stats.record_pass();
            current = baseline;

            debug!(
                event = "pass_end",
                pass,
                committed,
                reverted,
                global_imbalance = baseline,
            );

            if !improved {
                stats.converged = true;
                break;
            }
        }

        stats.final_global_imbalance = current;
        stats.finish();

        info!(
            event = "balance_end",
            passes = stats.passes,
            swaps = stats.swaps_committed,
            reverted = stats.swaps_reverted,
            converged = stats.converged,
            global_imbalance = current,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        stats
    }
}

/// Balances the grid in place with the given pass limit and threshold.
pub fn apply_balancing<S>(
    grid: &mut SeatGrid<S>,
    max_iterations: u32,
    local_imbalance_threshold: f64,
) -> BalanceStats {
    BalancingPhase::new(max_iterations, local_imbalance_threshold).solve(grid)
}
