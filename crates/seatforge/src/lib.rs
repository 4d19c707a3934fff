//! SeatForge - Balanced classroom seating charts
//!
//! Hand over a roster and the room's dimensions, get back a seat map in
//! which strong and struggling students are spread out rather than
//! clustered, plus the imbalance metrics behind it.
//!
//! # Example
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let students = vec![
//!     Student::new("ada", 92.0, 85.0, 70.0, 0.0),
//!     Student::new("bo", 55.0, 60.0, 80.0, 4.0),
//!     Student::new("cy", 78.0, 90.0, 65.0, 1.0),
//!     Student::new("di", 64.0, 45.0, 88.0, 2.0),
//! ];
//!
//! let chart = generate_seating_chart(students, 2, 3);
//! assert_eq!(chart.seat_map.occupied_count(), 4);
//! assert!(chart.imbalance_metrics.global >= 0.0);
//! ```

// Core types
pub use seatforge_core::{
    composite_score, compute_all_scores, ImbalanceMetrics, Position, Result, ScoredStudent,
    SeatGrid, SeatingError, SeatingStudent, Student,
};

// Configuration
pub use seatforge_config::{BalancingConfig, ConfigError, SeatingConfig};

// Engine
pub use seatforge_solver::{
    apply_balancing, evaluate, find_swap_candidate, generate_seating_chart, global_imbalance,
    local_imbalance, neighbor_average, neighbors, snake_place, BalanceStats, BalancingPhase,
    SeatingChart, SeatingPlanner, SeatingRequest,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        generate_seating_chart, ImbalanceMetrics, Position, SeatGrid, SeatingChart, SeatingConfig,
        SeatingError, SeatingPlanner, SeatingStudent, Student,
    };
}
