//! End-to-end tests through the public facade.

use seatforge::prelude::*;
use seatforge::{evaluate, global_imbalance, BalancingPhase};
use seatforge_test::{random_roster, roster_from_scores};

#[test]
fn two_by_two_chart_follows_snake_order() {
    let chart = generate_seating_chart(roster_from_scores(&[10.0, 8.0, 6.0, 4.0]), 2, 2);

    let ids: Vec<Vec<Option<&str>>> = chart
        .seat_map
        .to_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|seat| seat.map(|s| s.id())).collect())
        .collect();
    assert_eq!(
        ids,
        vec![
            vec![Some("s0"), Some("s1")],
            vec![Some("s3"), Some("s2")],
        ]
    );
}

#[test]
fn classroom_run_reduces_or_keeps_imbalance() {
    let planner = SeatingPlanner::new(SeatingConfig::new().with_seat_limit(64)).unwrap();

    for seed in 0..5u64 {
        let chart = planner.generate(random_roster(seed, 28), 5, 6).unwrap();
        assert!(chart.imbalance_metrics.global <= chart.statistics.initial_global_imbalance);
        assert_eq!(chart.imbalance_metrics, evaluate(&chart.seat_map));
    }
}

#[test]
fn config_file_drives_planner() {
    let config = SeatingConfig::from_toml_str(
        r#"
        [balancing]
        max_iterations = 0
        "#,
    )
    .unwrap();
    let planner = SeatingPlanner::new(config).unwrap();

    let chart = planner.generate(random_roster(1, 12), 3, 4).unwrap();
    assert_eq!(chart.statistics.passes, 0);
    assert_eq!(
        chart.imbalance_metrics.global,
        chart.statistics.initial_global_imbalance
    );
}

#[test]
fn converged_chart_is_stable() {
    let mut chart = generate_seating_chart(random_roster(21, 20), 4, 5);
    let phase = BalancingPhase::new(1000, 0.25);
    phase.solve(&mut chart.seat_map);
    let settled = chart.seat_map.clone();

    let stats = phase.solve(&mut chart.seat_map);

    assert_eq!(stats.swaps_committed, 0);
    assert_eq!(chart.seat_map, settled);
    assert_eq!(stats.final_global_imbalance, global_imbalance(&settled));
}

#[cfg(feature = "serde")]
#[test]
fn chart_serializes_like_the_app_expects() {
    let chart = generate_seating_chart(roster_from_scores(&[3.0, 1.0]), 1, 3);
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["seatMap"][0][0]["id"], "s0");
    assert_eq!(json["seatMap"][0][0]["compositeScore"], 3.0);
    assert!(json["seatMap"][0][2].is_null());
    assert_eq!(json["compositeScores"]["s1"], 1.0);
    assert_eq!(json["imbalanceMetrics"]["global"], 4.0);
    assert!(json.get("statistics").is_none());
}
