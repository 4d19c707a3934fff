//! Grid fixtures.

use seatforge_core::{Position, ScoredStudent, SeatGrid, Student};

use crate::roster::student_with_score;

/// Builds a grid from a matrix of composite scores (`None` = empty seat).
///
/// Seat `(r, c)` holds a student with id `"r{r}c{c}"`.
///
/// # Panics
///
/// Panics if the rows differ in length.
pub fn grid_from_scores(scores: &[&[Option<f64>]]) -> SeatGrid<Student> {
    let rows = scores.len();
    let cols = scores.first().map_or(0, |row| row.len());
    let mut grid = SeatGrid::new(rows, cols);

    for (r, row) in scores.iter().enumerate() {
        assert_eq!(row.len(), cols, "ragged score matrix at row {r}");
        for (c, score) in row.iter().enumerate() {
            grid[Position::new(r, c)] =
                score.map(|s| ScoredStudent::new(student_with_score(format!("r{r}c{c}"), s)));
        }
    }
    grid
}

/// Reads the composite scores back out of a grid, row by row.
pub fn score_matrix<S>(grid: &SeatGrid<S>) -> Vec<Vec<Option<f64>>> {
    grid.to_rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|seat| seat.map(|s| s.composite_score()))
                .collect()
        })
        .collect()
}
