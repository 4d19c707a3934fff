//! Student model.
//!
//! The balancer only reads an id and four numeric attributes from each
//! student. Callers with richer records implement [`SeatingStudent`] on
//! their own type and the record travels through the engine untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::score::composite_score;

/// Attributes the balancer reads from a student record.
///
/// # Example
///
/// ```
/// use seatforge_core::{composite_score, SeatingStudent};
///
/// struct Pupil {
///     name: String,
///     grades: [f64; 4],
/// }
///
/// impl SeatingStudent for Pupil {
///     fn id(&self) -> &str { &self.name }
///     fn academic_score(&self) -> f64 { self.grades[0] }
///     fn behavior_score(&self) -> f64 { self.grades[1] }
///     fn social_score(&self) -> f64 { self.grades[2] }
///     fn support_needs(&self) -> f64 { self.grades[3] }
/// }
///
/// let pupil = Pupil { name: "ada".into(), grades: [2.0, 0.0, 0.0, 0.0] };
/// assert_eq!(composite_score(&pupil), 1.0);
/// ```
pub trait SeatingStudent {
    /// Unique, opaque identifier.
    fn id(&self) -> &str;

    /// Academic score.
    fn academic_score(&self) -> f64;

    /// Behavior score.
    fn behavior_score(&self) -> f64;

    /// Social score.
    fn social_score(&self) -> f64;

    /// Support-needs level. Higher means more intensive support.
    fn support_needs(&self) -> f64;
}

/// A plain student record carrying only what the balancer reads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Student {
    pub id: String,
    pub academic_score: f64,
    pub behavior_score: f64,
    pub social_score: f64,
    pub support_needs: f64,
}

impl Student {
    /// Creates a new student.
    pub fn new(
        id: impl Into<String>,
        academic_score: f64,
        behavior_score: f64,
        social_score: f64,
        support_needs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            academic_score,
            behavior_score,
            social_score,
            support_needs,
        }
    }
}

impl SeatingStudent for Student {
    fn id(&self) -> &str {
        &self.id
    }

    fn academic_score(&self) -> f64 {
        self.academic_score
    }

    fn behavior_score(&self) -> f64 {
        self.behavior_score
    }

    fn social_score(&self) -> f64 {
        self.social_score
    }

    fn support_needs(&self) -> f64 {
        self.support_needs
    }
}

/// A student together with its composite score.
///
/// The score is computed once on construction and never changes for the
/// lifetime of a balancing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredStudent<S> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    student: S,
    composite_score: f64,
}

impl<S: SeatingStudent> ScoredStudent<S> {
    /// Scores a student.
    pub fn new(student: S) -> Self {
        let composite_score = composite_score(&student);
        Self {
            student,
            composite_score,
        }
    }
}

impl<S> ScoredStudent<S> {
    /// Pairs a student with an already computed composite score.
    pub fn with_score(student: S, composite_score: f64) -> Self {
        Self {
            student,
            composite_score,
        }
    }

    /// Returns the composite score.
    pub fn composite_score(&self) -> f64 {
        self.composite_score
    }

    /// Returns the underlying student record.
    pub fn student(&self) -> &S {
        &self.student
    }

    /// Unwraps the student record.
    pub fn into_inner(self) -> S {
        self.student
    }
}

impl<S: SeatingStudent> ScoredStudent<S> {
    /// Returns the student's id.
    pub fn id(&self) -> &str {
        self.student.id()
    }
}
