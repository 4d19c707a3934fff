//! Composite score model.
//!
//! Collapses a student's four attributes into the single scalar the
//! balancer works with. Weights are fixed; inputs are not clamped or
//! validated, so callers must supply attributes on a consistent scale.

use std::collections::HashMap;

use crate::student::SeatingStudent;

/// Weight of the academic score.
pub const ACADEMIC_WEIGHT: f64 = 0.5;
/// Weight of the behavior score.
pub const BEHAVIOR_WEIGHT: f64 = 0.3;
/// Weight of the social score.
pub const SOCIAL_WEIGHT: f64 = 0.2;
/// Weight of the support-needs level. Negative: more support lowers the score.
pub const SUPPORT_NEEDS_WEIGHT: f64 = -0.4;

/// Computes the composite score of a student.
///
/// `0.5·academic + 0.3·behavior + 0.2·social − 0.4·support_needs`
///
/// # Example
///
/// ```
/// use seatforge_core::{composite_score, Student};
///
/// let student = Student::new("s1", 80.0, 70.0, 60.0, 10.0);
/// let score = composite_score(&student);
/// assert!((score - 69.0).abs() < 1e-9);
/// ```
pub fn composite_score<S: SeatingStudent + ?Sized>(student: &S) -> f64 {
    student.academic_score() * ACADEMIC_WEIGHT
        + student.behavior_score() * BEHAVIOR_WEIGHT
        + student.social_score() * SOCIAL_WEIGHT
        + student.support_needs() * SUPPORT_NEEDS_WEIGHT
}

/// Computes the composite score of every student, keyed by id.
///
/// Students that will not fit the grid are still scored. When two students
/// share an id, the later one wins.
pub fn compute_all_scores<S: SeatingStudent>(students: &[S]) -> HashMap<String, f64> {
    students
        .iter()
        .map(|student| (student.id().to_string(), composite_score(student)))
        .collect()
}
