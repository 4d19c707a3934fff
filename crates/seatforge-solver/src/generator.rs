//! Seating chart generation.
//!
//! Scores every student, sorts by descending composite score, places them
//! in boustrophedon order, balances the grid and reports the final
//! metrics. [`generate_seating_chart`] runs with default settings;
//! [`SeatingPlanner`] runs with a validated [`SeatingConfig`].

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, info, warn};

use seatforge_config::SeatingConfig;
use seatforge_core::{
    compute_all_scores, ImbalanceMetrics, Result, ScoredStudent, SeatGrid, SeatingError,
    SeatingStudent,
};

use crate::balancing::BalancingPhase;
use crate::imbalance::evaluate;
use crate::placement::snake_place;
use crate::stats::BalanceStats;

/// Grids above this many seats are accepted but logged at WARN: balancing
/// cost grows with the square of the seat count.
pub const CLASSROOM_SCALE_SEATS: usize = 256;

/// A generated seating chart.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatingChart<S> {
    /// The balanced grid.
    pub seat_map: SeatGrid<S>,
    /// Composite score of every input student, placed or not.
    pub composite_scores: HashMap<String, f64>,
    /// Per-student and global imbalance of `seat_map`.
    pub imbalance_metrics: ImbalanceMetrics,
    /// Statistics of the balancing run.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub statistics: BalanceStats,
}

/// One classroom to seat.
#[derive(Debug, Clone)]
pub struct SeatingRequest<S> {
    pub students: Vec<S>,
    pub rows: usize,
    pub cols: usize,
}

impl<S> SeatingRequest<S> {
    pub fn new(students: Vec<S>, rows: usize, cols: usize) -> Self {
        Self {
            students,
            rows,
            cols,
        }
    }
}

/// Generates a balanced seating chart with default settings.
///
/// Students beyond the grid's capacity are left out of the seat map but
/// still appear in `composite_scores`. An empty roster yields an all-empty
/// grid with zero imbalance.
///
/// # Example
///
/// ```
/// use seatforge_core::Student;
/// use seatforge_solver::generate_seating_chart;
///
/// let students = vec![
///     Student::new("ada", 90.0, 80.0, 70.0, 1.0),
///     Student::new("bo", 60.0, 70.0, 80.0, 3.0),
///     Student::new("cy", 75.0, 65.0, 90.0, 0.0),
/// ];
///
/// let chart = generate_seating_chart(students, 2, 2);
///
/// assert_eq!(chart.seat_map.occupied_count(), 3);
/// assert_eq!(chart.composite_scores.len(), 3);
/// assert_eq!(chart.imbalance_metrics.local.len(), 3);
/// ```
pub fn generate_seating_chart<S: SeatingStudent>(
    students: Vec<S>,
    rows: usize,
    cols: usize,
) -> SeatingChart<S> {
    SeatingPlanner::default().plan(students, rows, cols)
}

/// Seating chart generator driven by configuration.
///
/// # Example
///
/// ```
/// use seatforge_config::SeatingConfig;
/// use seatforge_core::{SeatingError, Student};
/// use seatforge_solver::SeatingPlanner;
///
/// let planner = SeatingPlanner::new(SeatingConfig::new().with_seat_limit(40)).unwrap();
///
/// let err = planner.generate(Vec::<Student>::new(), 10, 10).unwrap_err();
/// assert_eq!(err, SeatingError::GridTooLarge { seats: 100, limit: 40 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatingPlanner {
    config: SeatingConfig,
    phase: BalancingPhase,
}

impl SeatingPlanner {
    /// Creates a planner from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Config`] if the configuration is invalid.
    pub fn new(config: SeatingConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SeatingError::Config(e.to_string()))?;
        let phase = BalancingPhase::from_config(&config.balancing);
        Ok(Self { config, phase })
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Generates a seating chart.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::GridTooLarge`] if the grid exceeds the
    /// configured seat limit.
    pub fn generate<S: SeatingStudent>(
        &self,
        students: Vec<S>,
        rows: usize,
        cols: usize,
    ) -> Result<SeatingChart<S>> {
        self.check_seat_limit(rows, cols)?;
        Ok(self.plan(students, rows, cols))
    }

    /// Generates seating charts for independent classrooms in parallel.
    ///
    /// Results come back in request order.
    pub fn generate_many<S>(&self, requests: Vec<SeatingRequest<S>>) -> Vec<Result<SeatingChart<S>>>
    where
        S: SeatingStudent + Send,
    {
        requests
            .into_par_iter()
            .map(|request| self.generate(request.students, request.rows, request.cols))
            .collect()
    }

    /// Balances an existing grid in place, for instance after manual edits.
    pub fn balance<S>(&self, grid: &mut SeatGrid<S>) -> BalanceStats {
        self.phase.solve(grid)
    }

    fn check_seat_limit(&self, rows: usize, cols: usize) -> Result<()> {
        let seats = rows.saturating_mul(cols);
        match self.config.seat_limit {
            Some(limit) if seats > limit => Err(SeatingError::GridTooLarge { seats, limit }),
            _ => Ok(()),
        }
    }

    fn plan<S: SeatingStudent>(&self, students: Vec<S>, rows: usize, cols: usize) -> SeatingChart<S> {
        let student_count = students.len();
        let seats = rows.saturating_mul(cols);

        info!(event = "seating_start", student_count, rows, cols);

        if seats > CLASSROOM_SCALE_SEATS {
            warn!(
                event = "large_grid",
                seats,
                classroom_scale = CLASSROOM_SCALE_SEATS,
                "balancing cost grows quadratically with the seat count"
            );
        }

        let composite_scores = compute_all_scores(&students);

        let mut scored: Vec<ScoredStudent<S>> =
            students.into_iter().map(ScoredStudent::new).collect();
        scored.sort_by(|a, b| {
            b.composite_score()
                .partial_cmp(&a.composite_score())
                .unwrap_or(Ordering::Equal)
        });

        let dropped = student_count.saturating_sub(seats);
        if dropped > 0 {
            debug!(
                event = "students_dropped",
                dropped,
                ids = ?scored[seats..].iter().map(|s| s.id()).collect::<Vec<_>>(),
            );
        }

        let mut seat_map = snake_place(scored, rows, cols);
        let statistics = self.phase.solve(&mut seat_map);
        let imbalance_metrics = evaluate(&seat_map);

        info!(
            event = "seating_end",
            placed = student_count - dropped,
            dropped,
            passes = statistics.passes,
            swaps = statistics.swaps_committed,
            global_imbalance = imbalance_metrics.global,
        );

        SeatingChart {
            seat_map,
            composite_scores,
            imbalance_metrics,
            statistics,
        }
    }
}
