//! Neighbourhood analysis.
//!
//! The neighbourhood of a seat is every occupied seat within Chebyshev
//! distance `radius`, excluding the seat itself. Neighbours are enumerated
//! row offset first, then column offset, both ascending, so averages are
//! always summed in the same order.

use smallvec::SmallVec;

use seatforge_core::{Position, ScoredStudent, SeatGrid};

/// Radius used by the global evaluator and the swap search.
pub const DEFAULT_RADIUS: usize = 1;

/// An occupied seat next to the seat under analysis.
#[derive(Debug)]
pub struct Neighbor<'a, S> {
    pub position: Position,
    pub student: &'a ScoredStudent<S>,
}

/// Neighbour list; stays inline for the eight seats of radius 1.
pub type NeighborList<'a, S> = SmallVec<[Neighbor<'a, S>; 8]>;

fn neighborhood<S>(
    grid: &SeatGrid<S>,
    center: Position,
    radius: usize,
) -> impl Iterator<Item = (Position, &ScoredStudent<S>)> + '_ {
    let row_end = center.row.saturating_add(radius).saturating_add(1).min(grid.rows());
    let col_start = center.col.saturating_sub(radius);
    let col_end = center.col.saturating_add(radius).saturating_add(1).min(grid.cols());

    (center.row.saturating_sub(radius)..row_end)
        .flat_map(move |row| (col_start..col_end).map(move |col| Position::new(row, col)))
        .filter(move |&position| position != center)
        .filter_map(move |position| grid.get(position).map(|student| (position, student)))
}

/// Collects the occupied neighbours of a seat.
pub fn neighbors<S>(grid: &SeatGrid<S>, position: Position, radius: usize) -> NeighborList<'_, S> {
    neighborhood(grid, position, radius)
        .map(|(position, student)| Neighbor { position, student })
        .collect()
}

/// Mean composite score of a seat's occupied neighbours, or `None` if it
/// has none.
pub fn neighbor_average<S>(grid: &SeatGrid<S>, position: Position, radius: usize) -> Option<f64> {
    let (sum, count) = neighborhood(grid, position, radius)
        .fold((0.0, 0usize), |(sum, count), (_, student)| {
            (sum + student.composite_score(), count + 1)
        });
    (count > 0).then(|| sum / count as f64)
}

/// Absolute difference between a seat's composite score and the mean of
/// its occupied neighbours.
///
/// An empty seat, or a seat without occupied neighbours, is balanced by
/// definition and yields 0.
pub fn local_imbalance<S>(grid: &SeatGrid<S>, position: Position, radius: usize) -> f64 {
    let Some(current) = grid.get(position) else {
        return 0.0;
    };
    match neighbor_average(grid, position, radius) {
        Some(average) => (current.composite_score() - average).abs(),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_test::grid_from_scores;

    #[test]
    fn test_corner_has_three_neighbors() {
        let grid = grid_from_scores(&[
            &[Some(1.0), Some(2.0), Some(3.0)],
            &[Some(4.0), Some(5.0), Some(6.0)],
            &[Some(7.0), Some(8.0), Some(9.0)],
        ]);

        let found: Vec<Position> = neighbors(&grid, Position::new(0, 0), 1)
            .iter()
            .map(|n| n.position)
            .collect();
        assert_eq!(
            found,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_center_enumeration_order() {
        let grid = grid_from_scores(&[
            &[Some(1.0), Some(2.0), Some(3.0)],
            &[Some(4.0), Some(5.0), Some(6.0)],
            &[Some(7.0), Some(8.0), Some(9.0)],
        ]);

        let scores: Vec<f64> = neighbors(&grid, Position::new(1, 1), 1)
            .iter()
            .map(|n| n.student.composite_score())
            .collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(neighbor_average(&grid, Position::new(1, 1), 1), Some(5.0));
        assert_eq!(local_imbalance(&grid, Position::new(1, 1), 1), 0.0);
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let grid = grid_from_scores(&[&[Some(10.0), None], &[None, Some(4.0)]]);

        assert_eq!(neighbors(&grid, Position::new(0, 0), 1).len(), 1);
        assert_eq!(local_imbalance(&grid, Position::new(0, 0), 1), 6.0);
        assert_eq!(local_imbalance(&grid, Position::new(1, 1), 1), 6.0);
    }

    #[test]
    fn test_empty_center_is_zero() {
        let grid = grid_from_scores(&[&[Some(10.0), None], &[None, Some(4.0)]]);
        assert_eq!(local_imbalance(&grid, Position::new(0, 1), 1), 0.0);
    }

    #[test]
    fn test_isolated_seat_is_zero() {
        let grid = grid_from_scores(&[&[Some(10.0)]]);
        assert!(neighbors(&grid, Position::new(0, 0), 1).is_empty());
        assert_eq!(neighbor_average(&grid, Position::new(0, 0), 1), None);
        assert_eq!(local_imbalance(&grid, Position::new(0, 0), 1), 0.0);

        let sparse = grid_from_scores(&[&[Some(10.0), None, Some(2.0)]]);
        assert_eq!(local_imbalance(&sparse, Position::new(0, 0), 1), 0.0);
    }

    #[test]
    fn test_larger_radius_reaches_further() {
        let grid = grid_from_scores(&[&[Some(10.0), None, Some(2.0)]]);
        assert_eq!(neighbors(&grid, Position::new(0, 0), 2).len(), 1);
        assert_eq!(local_imbalance(&grid, Position::new(0, 0), 2), 8.0);
    }

    #[test]
    fn test_outside_position_is_zero() {
        let grid = grid_from_scores(&[&[Some(1.0), Some(3.0)]]);
        assert_eq!(local_imbalance(&grid, Position::new(4, 4), 1), 0.0);
    }

    #[test]
    fn test_negative_scores_give_non_negative_imbalance() {
        let grid = grid_from_scores(&[&[Some(-5.0), Some(3.0), Some(-1.0)]]);
        for col in 0..3 {
            assert!(local_imbalance(&grid, Position::new(0, col), 1) >= 0.0);
        }
        assert_eq!(local_imbalance(&grid, Position::new(0, 1), 1), 6.0);
    }
}
