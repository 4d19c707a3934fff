//! SeatForge Core - Core types for classroom seat balancing
//!
//! This crate provides the fundamental abstractions for SeatForge:
//! - Student model and the composite score derived from it
//! - Seat positions and the rectangular seat grid
//! - Imbalance metrics reported for a seating arrangement
//! - Error types

pub mod error;
pub mod grid;
pub mod metrics;
pub mod score;
pub mod student;

pub use error::{Result, SeatingError};
pub use grid::{Position, SeatGrid};
pub use metrics::ImbalanceMetrics;
pub use score::{
    compute_all_scores, composite_score, ACADEMIC_WEIGHT, BEHAVIOR_WEIGHT, SOCIAL_WEIGHT,
    SUPPORT_NEEDS_WEIGHT,
};
pub use student::{ScoredStudent, SeatingStudent, Student};
