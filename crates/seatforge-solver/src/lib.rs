//! SeatForge Solver Engine
//!
//! This crate provides the seat-balancing engine:
//! - Boustrophedon initial placement
//! - Neighbourhood analysis and local / global imbalance
//! - Swap candidate search
//! - The hill-climbing balancing phase and its statistics
//! - The seating chart generator and configured planner
//!
//! Logging levels:
//! - **INFO**: Generation and balancing start/end summaries
//! - **DEBUG**: Per-pass results, dropped students
//! - **TRACE**: Every tentative swap
//!
//! # Complexity
//!
//! A balancing pass runs one swap search per occupied seat, each scanning
//! the whole grid, and re-evaluates the global imbalance from scratch after
//! every tentative swap. With `n = rows * cols` a pass costs `O(n^2)` and a
//! run `O(max_iterations * n^2)`. This is fine at classroom scale (tens of
//! seats); set `seat_limit` in the configuration to refuse larger grids.

pub mod balancing;
pub mod generator;
pub mod imbalance;
pub mod neighborhood;
pub mod placement;
pub mod stats;
pub mod swap;

pub use balancing::{apply_balancing, BalancingPhase};
pub use generator::{
    generate_seating_chart, SeatingChart, SeatingPlanner, SeatingRequest, CLASSROOM_SCALE_SEATS,
};
pub use imbalance::{evaluate, global_imbalance};
pub use neighborhood::{
    local_imbalance, neighbor_average, neighbors, Neighbor, NeighborList, DEFAULT_RADIUS,
};
pub use placement::{snake_order, snake_place};
pub use stats::BalanceStats;
pub use swap::{find_swap_candidate, search_swap_candidate, SwapCandidate, EPSILON};
