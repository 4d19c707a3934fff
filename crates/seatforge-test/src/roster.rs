//! Roster fixtures.
//!
//! A student whose academic score is `2 * c` and whose other attributes
//! are zero has a composite score of exactly `c`, which keeps expected
//! values in tests free of rounding noise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seatforge_core::Student;

/// Creates a student whose composite score is exactly `composite`.
pub fn student_with_score(id: impl Into<String>, composite: f64) -> Student {
    Student::new(id, composite * 2.0, 0.0, 0.0, 0.0)
}

/// Creates one student per score, with ids `s0`, `s1`, ...
pub fn roster_from_scores(scores: &[f64]) -> Vec<Student> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| student_with_score(format!("s{i}"), score))
        .collect()
}

/// Creates `count` students that all share the same attributes, with a
/// composite score of exactly 71.
pub fn uniform_roster(count: usize) -> Vec<Student> {
    (0..count)
        .map(|i| Student::new(format!("u{i}"), 80.0, 70.0, 60.0, 5.0))
        .collect()
}

/// Creates `count` students with seeded random attributes.
///
/// Scores are drawn from 0..100 and support needs from 0..5, the scales
/// used by the surrounding application's student forms.
pub fn random_roster(seed: u64, count: usize) -> Vec<Student> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Student::new(
                format!("r{i}"),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..5.0),
            )
        })
        .collect()
}
