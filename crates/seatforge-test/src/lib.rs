//! Shared test fixtures for SeatForge crates.
//!
//! This crate provides roster builders and grid constructors for testing.
//! It only depends on `seatforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`roster`] - Students with chosen or seeded-random composite scores
//! - [`grid`] - Grids built from score matrices, and the reverse
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! seatforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use seatforge_test::{grid_from_scores, roster_from_scores};
//! ```

pub mod grid;
pub mod roster;

pub use grid::{grid_from_scores, score_matrix};
pub use roster::{random_roster, roster_from_scores, student_with_score, uniform_roster};
