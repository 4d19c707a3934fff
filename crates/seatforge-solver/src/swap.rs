//! Swap candidate search.
//!
//! For a seat whose local imbalance exceeds the threshold, scans the whole
//! grid for the occupant whose composite score best matches that seat's
//! neighbourhood average. The search is local-greedy: it ignores what the
//! swap does to the candidate's own former neighbourhood. The balancing
//! phase re-checks the global imbalance before keeping any swap.

use seatforge_core::{Position, SeatGrid};

use crate::neighborhood::{local_imbalance, neighbor_average, DEFAULT_RADIUS};

/// Minimum improvement margin. Near-ties never displace an earlier
/// candidate, so the first candidate in row-major order wins ties.
pub const EPSILON: f64 = 1e-6;

/// Best alternative occupant found for a seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapCandidate {
    /// Seat of the candidate.
    pub position: Position,
    /// Reduction of the seat's local imbalance if the candidate sat there.
    pub improvement: f64,
}

/// Searches for the best swap candidate for `position`.
///
/// Returns `None` if the seat is empty, its local imbalance is at or below
/// `threshold`, it has no occupied neighbours, or no other occupant
/// improves on it by more than [`EPSILON`].
pub fn search_swap_candidate<S>(
    grid: &SeatGrid<S>,
    position: Position,
    threshold: f64,
) -> Option<SwapCandidate> {
    grid.get(position)?;

    let current_imbalance = local_imbalance(grid, position, DEFAULT_RADIUS);
    if current_imbalance <= threshold {
        return None;
    }

    let average = neighbor_average(grid, position, DEFAULT_RADIUS)?;

    let mut best: Option<SwapCandidate> = None;
    let mut best_improvement = 0.0;

    for (candidate_position, candidate) in grid.iter_occupied() {
        if candidate_position == position {
            continue;
        }

        let candidate_imbalance = (candidate.composite_score() - average).abs();
        let improvement = current_imbalance - candidate_imbalance;

        if improvement > best_improvement + EPSILON {
            best_improvement = improvement;
            best = Some(SwapCandidate {
                position: candidate_position,
                improvement,
            });
        }
    }

    best
}

/// Returns the seat whose occupant should be tried in place of the one at
/// `position`. Nothing is swapped.
pub fn find_swap_candidate<S>(
    grid: &SeatGrid<S>,
    position: Position,
    threshold: f64,
) -> Option<Position> {
    search_swap_candidate(grid, position, threshold).map(|candidate| candidate.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_test::grid_from_scores;

    #[test]
    fn test_balanced_seat_has_no_candidate() {
        let grid = grid_from_scores(&[&[Some(5.0), Some(5.1), Some(1.0)]]);
        // |5.0 - 5.1| = 0.1 <= 0.25
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 0), 0.25), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let grid = grid_from_scores(&[&[Some(1.0), Some(1.5), Some(9.0)]]);
        // |1.0 - 1.5| = 0.5
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 0), 0.5), None);
        assert!(find_swap_candidate(&grid, Position::new(0, 0), 0.4).is_some());
    }

    #[test]
    fn test_picks_closest_to_neighbor_average() {
        // Seat (0,0): score 9, neighbours 1 and 1 -> average 1, imbalance 8.
        let grid = grid_from_scores(&[
            &[Some(9.0), Some(1.0), Some(4.0)],
            &[Some(1.0), None, Some(2.0)],
        ]);

        let candidate = search_swap_candidate(&grid, Position::new(0, 0), 0.25).unwrap();
        // Scores 1 at (0,1) and (1,0) tie; the first in row-major order wins.
        assert_eq!(candidate.position, Position::new(0, 1));
        assert!((candidate.improvement - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_tie_keeps_first_candidate() {
        // Seat (0,0): score 0, single neighbour 10. (0,1) and (0,3) both
        // match the average exactly; (0,1) comes first.
        let grid = grid_from_scores(&[&[Some(0.0), Some(10.0), Some(3.0), Some(10.0)]]);
        assert_eq!(
            find_swap_candidate(&grid, Position::new(0, 0), 0.25),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_near_tie_keeps_first_candidate() {
        // Seat (0,0): score 0, neighbours 9, 11, 10 -> average 10, imbalance 10.
        // (0,2) improves by 9.9999995; (0,3) improves by 10, which is not more
        // than EPSILON better, so (0,2) is kept.
        let grid = grid_from_scores(&[
            &[Some(0.0), Some(9.0), Some(10.000_000_5), Some(10.0)],
            &[Some(11.0), Some(10.0), Some(50.0), Some(50.0)],
        ]);
        assert_eq!(
            find_swap_candidate(&grid, Position::new(0, 0), 0.25),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_no_improving_candidate() {
        // Seat (0,1): score 10, neighbours 0 and 20 -> average 10, imbalance 0.
        let grid = grid_from_scores(&[&[Some(0.0), Some(10.0), Some(20.0)]]);
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 1), 0.0), None);

        // Seat (0,0): score 12, neighbours 10 and 30 -> average 20, imbalance 8.
        // Every other occupant is further from 20.
        let grid = grid_from_scores(&[&[Some(12.0), Some(10.0)], &[Some(30.0), None]]);
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 0), 0.25), None);
    }

    #[test]
    fn test_empty_seat_and_isolated_seat() {
        let grid = grid_from_scores(&[&[None, Some(10.0)]]);
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 0), 0.25), None);

        let grid = grid_from_scores(&[&[Some(10.0), None, Some(1.0)]]);
        assert_eq!(find_swap_candidate(&grid, Position::new(0, 0), 0.0), None);
    }

    #[test]
    fn test_search_does_not_mutate() {
        let grid = grid_from_scores(&[&[Some(9.0), Some(1.0), Some(1.0)]]);
        let before = grid.clone();
        let _ = find_swap_candidate(&grid, Position::new(0, 0), 0.25);
        assert_eq!(grid, before);
    }
}
