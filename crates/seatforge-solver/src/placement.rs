//! Boustrophedon initial placement.
//!
//! Even rows fill left-to-right and odd rows right-to-left. Fed with
//! students sorted by descending composite score, this spreads strong and
//! weak students across the room instead of stacking the strongest in the
//! front rows, giving the balancer a reasonable starting point.

use seatforge_core::{Position, ScoredStudent, SeatGrid};

/// Iterates over every seat in boustrophedon order.
///
/// # Example
///
/// ```
/// use seatforge_core::Position;
/// use seatforge_solver::snake_order;
///
/// let order: Vec<Position> = snake_order(2, 2).collect();
/// assert_eq!(
///     order,
///     vec![
///         Position::new(0, 0),
///         Position::new(0, 1),
///         Position::new(1, 1),
///         Position::new(1, 0),
///     ]
/// );
/// ```
pub fn snake_order(rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    (0..rows).flat_map(move |row| {
        (0..cols).map(move |i| {
            let col = if row % 2 == 0 { i } else { cols - 1 - i };
            Position::new(row, col)
        })
    })
}

/// Places students into a fresh `rows x cols` grid in boustrophedon order.
///
/// Students are consumed in the order given; callers sort them by
/// descending composite score first. Placement stops when either the
/// students or the seats run out: leftover seats stay empty and leftover
/// students are dropped.
pub fn snake_place<S, I>(students: I, rows: usize, cols: usize) -> SeatGrid<S>
where
    I: IntoIterator<Item = ScoredStudent<S>>,
{
    let mut grid = SeatGrid::new(rows, cols);
    for (position, student) in snake_order(rows, cols).zip(students) {
        grid[position] = Some(student);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_test::{roster_from_scores, score_matrix};

    fn scored(scores: &[f64]) -> Vec<ScoredStudent<seatforge_core::Student>> {
        roster_from_scores(scores)
            .into_iter()
            .map(ScoredStudent::new)
            .collect()
    }

    #[test]
    fn test_two_by_two_scenario() {
        let grid = snake_place(scored(&[10.0, 8.0, 6.0, 4.0]), 2, 2);
        assert_eq!(
            score_matrix(&grid),
            vec![vec![Some(10.0), Some(8.0)], vec![Some(4.0), Some(6.0)]]
        );
    }

    #[test]
    fn test_three_rows_alternate() {
        let grid = snake_place(scored(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]), 3, 3);
        assert_eq!(
            score_matrix(&grid),
            vec![
                vec![Some(9.0), Some(8.0), Some(7.0)],
                vec![Some(4.0), Some(5.0), Some(6.0)],
                vec![Some(3.0), Some(2.0), Some(1.0)],
            ]
        );
    }

    #[test]
    fn test_fewer_students_than_seats() {
        let grid = snake_place(scored(&[5.0, 4.0, 3.0, 2.0]), 2, 3);
        assert_eq!(
            score_matrix(&grid),
            vec![
                vec![Some(5.0), Some(4.0), Some(3.0)],
                vec![None, None, Some(2.0)],
            ]
        );
    }

    #[test]
    fn test_excess_students_are_dropped() {
        let grid = snake_place(scored(&[5.0, 4.0, 3.0, 2.0, 1.0]), 1, 3);
        assert_eq!(grid.occupied_count(), 3);
        assert!(grid.position_of("s3").is_none());
        assert!(grid.position_of("s4").is_none());
    }

    #[test]
    fn test_no_students() {
        let grid = snake_place(Vec::<ScoredStudent<seatforge_core::Student>>::new(), 2, 2);
        assert!(grid.is_vacant());
        assert_eq!(grid.capacity(), 4);
    }

    #[test]
    fn test_snake_order_covers_every_seat_once() {
        let mut order: Vec<Position> = snake_order(4, 5).collect();
        assert_eq!(order.len(), 20);
        order.sort();
        order.dedup();
        assert_eq!(order.len(), 20);
    }
}
