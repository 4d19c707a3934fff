//! Seat positions and the rectangular seat grid.
//!
//! Cells are stored row-major in a single `Vec`. Every iterator in this
//! module walks the grid in row-major order; the balancer's tie-breaking
//! depends on it.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SeatingError};
use crate::student::{ScoredStudent, SeatingStudent};

/// Zero-based seat coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A `rows x cols` grid of seats, each empty or holding a scored student.
///
/// # Example
///
/// ```
/// use seatforge_core::{Position, ScoredStudent, SeatGrid, Student};
///
/// let mut grid = SeatGrid::new(2, 3);
/// grid.set(Position::new(1, 2), Some(ScoredStudent::new(Student::new("a", 1.0, 1.0, 1.0, 0.0))))
///     .unwrap();
///
/// assert_eq!(grid.capacity(), 6);
/// assert_eq!(grid.occupied_count(), 1);
/// assert_eq!(grid.position_of("a"), Some(Position::new(1, 2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeatGrid<S> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<ScoredStudent<S>>>,
}

impl<S> SeatGrid<S> {
    /// Creates an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Self { rows, cols, cells }
    }

    /// Builds a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::RaggedGrid`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Option<ScoredStudent<S>>>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(row_count * cols);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(SeatingError::RaggedGrid {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the position lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    fn checked_index(&self, position: Position) -> Result<usize> {
        self.index_of(position)
            .ok_or(SeatingError::PositionOutOfBounds {
                row: position.row,
                col: position.col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    fn position_at(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Returns the occupant of a seat, or `None` if it is empty or outside
    /// the grid.
    pub fn get(&self, position: Position) -> Option<&ScoredStudent<S>> {
        self.index_of(position)
            .and_then(|index| self.cells[index].as_ref())
    }

    /// Returns true if the seat holds a student.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Replaces the content of a seat, returning the previous occupant.
    pub fn set(
        &mut self,
        position: Position,
        seat: Option<ScoredStudent<S>>,
    ) -> Result<Option<ScoredStudent<S>>> {
        let index = self.checked_index(position)?;
        Ok(std::mem::replace(&mut self.cells[index], seat))
    }

    /// Exchanges the contents of two seats. Either seat may be empty, so
    /// moving a student to a free desk is a swap with an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::PositionOutOfBounds`] if either position is
    /// outside the grid.
    pub fn swap_seats(&mut self, a: Position, b: Position) -> Result<()> {
        let a = self.checked_index(a)?;
        let b = self.checked_index(b)?;
        self.cells.swap(a, b);
        Ok(())
    }

    /// Exchanges the contents of two seats.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the grid.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (Some(a_index), Some(b_index)) = (self.index_of(a), self.index_of(b)) else {
            panic!(
                "swap {a} <-> {b} outside the {}x{} grid",
                self.rows, self.cols
            );
        };
        self.cells.swap(a_index, b_index);
    }

    /// Iterates over every seat in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&ScoredStudent<S>>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, seat)| (self.position_at(index), seat.as_ref()))
    }

    /// Iterates over occupied seats in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Position, &ScoredStudent<S>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, seat)| seat.as_ref().map(|s| (self.position_at(index), s)))
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|seat| seat.is_some()).count()
    }

    /// Returns true if no seat is occupied.
    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Borrowed nested-row view of the seat map.
    pub fn to_rows(&self) -> Vec<Vec<Option<&ScoredStudent<S>>>> {
        if self.cols == 0 {
            return (0..self.rows).map(|_| Vec::new()).collect();
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Option::as_ref).collect())
            .collect()
    }

    /// Consumes the grid into nested rows.
    pub fn into_rows(self) -> Vec<Vec<Option<ScoredStudent<S>>>> {
        let Self { rows, cols, cells } = self;
        let mut iter = cells.into_iter();
        (0..rows)
            .map(|_| iter.by_ref().take(cols).collect())
            .collect()
    }
}

impl<S> Index<Position> for SeatGrid<S> {
    type Output = Option<ScoredStudent<S>>;

    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    fn index(&self, position: Position) -> &Self::Output {
        match self.index_of(position) {
            Some(index) => &self.cells[index],
            None => panic!("{position} outside the {}x{} grid", self.rows, self.cols),
        }
    }
}

impl<S> IndexMut<Position> for SeatGrid<S> {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        match self.index_of(position) {
            Some(index) => &mut self.cells[index],
            None => panic!("{position} outside the {}x{} grid", self.rows, self.cols),
        }
    }
}

impl<S: SeatingStudent> SeatGrid<S> {
    /// Finds the seat of the student with the given id.
    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.iter_occupied()
            .find(|(_, student)| student.id() == id)
            .map(|(position, _)| position)
    }
}

#[cfg(feature = "serde")]
impl<S: Serialize> Serialize for SeatGrid<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: Deserialize<'de>> Deserialize<'de> for SeatGrid<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<Option<ScoredStudent<S>>>>::deserialize(deserializer)?;
        SeatGrid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
