//! Imbalance metrics reported for a seating arrangement.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-student local imbalance plus the global total.
///
/// `global` is the sum of every occupied seat's own deviation from its
/// neighbours' mean, not a symmetric pairwise energy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImbalanceMetrics {
    /// Student id -> local imbalance of that student's seat.
    pub local: HashMap<String, f64>,
    /// Sum of local imbalance over all occupied seats.
    pub global: f64,
}

impl ImbalanceMetrics {
    /// Returns the local imbalance recorded for a student.
    pub fn local_for(&self, id: &str) -> Option<f64> {
        self.local.get(id).copied()
    }

    /// Returns the id and value of the most imbalanced seat.
    ///
    /// Ties resolve to the smallest id so the result is stable.
    pub fn most_imbalanced(&self) -> Option<(&str, f64)> {
        self.local
            .iter()
            .max_by(|(a_id, a), (b_id, b)| a.total_cmp(b).then_with(|| b_id.cmp(a_id)))
            .map(|(id, value)| (id.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let metrics = ImbalanceMetrics::default();
        assert_eq!(metrics.global, 0.0);
        assert!(metrics.most_imbalanced().is_none());
        assert!(metrics.local_for("x").is_none());
    }

    #[test]
    fn test_most_imbalanced() {
        let metrics = ImbalanceMetrics {
            local: HashMap::from([
                ("a".to_string(), 0.5),
                ("c".to_string(), 2.0),
                ("b".to_string(), 2.0),
            ]),
            global: 4.5,
        };

        assert_eq!(metrics.most_imbalanced(), Some(("b", 2.0)));
        assert_eq!(metrics.local_for("a"), Some(0.5));
    }
}
