//! Error types for SeatForge

use thiserror::Error;

/// Main error type for SeatForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatingError {
    /// Invalid balancing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A seat edit addressed a cell outside the grid
    #[error("Position ({row}, {col}) is outside the {rows}x{cols} grid")]
    PositionOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Nested rows passed to build a grid differ in length
    #[error("Row {row} has {found} seats, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The grid exceeds the configured seat limit
    #[error("Grid has {seats} seats, above the configured limit of {limit}")]
    GridTooLarge { seats: usize, limit: usize },
}

/// Result type alias for SeatForge operations
pub type Result<T> = std::result::Result<T, SeatingError>;
