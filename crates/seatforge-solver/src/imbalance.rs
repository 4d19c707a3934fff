//! Global imbalance evaluation.
//!
//! The global imbalance is the objective the balancer minimises. It is
//! recomputed from scratch on every call; no incremental tracking.

use seatforge_core::{ImbalanceMetrics, SeatGrid, SeatingStudent};

use crate::neighborhood::{local_imbalance, DEFAULT_RADIUS};

/// Sums the radius-1 local imbalance of every occupied seat, row-major.
pub fn global_imbalance<S>(grid: &SeatGrid<S>) -> f64 {
    grid.iter_occupied()
        .map(|(position, _)| local_imbalance(grid, position, DEFAULT_RADIUS))
        .sum()
}

/// Computes per-student and global imbalance for any grid, for instance
/// one edited by hand.
///
/// If two seats hold students with the same id, the later seat in
/// row-major order wins the per-student entry; the global value still
/// counts both.
///
/// # Example
///
/// ```
/// use seatforge_core::{Position, ScoredStudent, SeatGrid, Student};
/// use seatforge_solver::evaluate;
///
/// let mut grid = SeatGrid::new(1, 2);
/// grid[Position::new(0, 0)] = Some(ScoredStudent::with_score(Student::new("a", 0.0, 0.0, 0.0, 0.0), 3.0));
/// grid[Position::new(0, 1)] = Some(ScoredStudent::with_score(Student::new("b", 0.0, 0.0, 0.0, 0.0), 1.0));
///
/// let metrics = evaluate(&grid);
/// assert_eq!(metrics.local_for("a"), Some(2.0));
/// assert_eq!(metrics.global, 4.0);
/// ```
pub fn evaluate<S: SeatingStudent>(grid: &SeatGrid<S>) -> ImbalanceMetrics {
    let mut metrics = ImbalanceMetrics::default();
    for (position, student) in grid.iter_occupied() {
        let imbalance = local_imbalance(grid, position, DEFAULT_RADIUS);
        metrics.local.insert(student.id().to_string(), imbalance);
        metrics.global += imbalance;
    }
    metrics
}
