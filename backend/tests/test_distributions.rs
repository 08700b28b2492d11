//! Distribution objects exercised through the public API, including
//! property-based checks of the piecewise-linear inversion invariants.

use proptest::prelude::*;
use travel_demand_core_rs::distributions::{ArrivalPattern, ContinuousCDF, ProbabilityMass};

#[test]
fn arrival_pattern_inversion_round_trips_on_table_points() {
    let pattern = ArrivalPattern::new(vec![(-60, 0.0), (-20, 0.3), (-5, 0.9), (0, 1.0)]).unwrap();
    for (day, probability) in [(-60, 0.0), (-20, 0.3), (-5, 0.9), (0, 1.0)] {
        assert!((pattern.invert(probability) - day as f64).abs() < 1e-9);
    }
}

#[test]
fn continuous_cdf_handles_a_single_segment() {
    let cdf = ContinuousCDF::new(vec![(100.0, 0.0), (200.0, 1.0)]).unwrap();
    assert_eq!(cdf.invert(0.0), 100.0);
    assert_eq!(cdf.invert(1.0), 200.0);
    assert_eq!(cdf.invert(0.5), 150.0);
}

#[test]
fn probability_mass_sampling_covers_the_full_unit_interval() {
    let mass = ProbabilityMass::new(vec![
        ("A".to_string(), 0.2),
        ("B".to_string(), 0.3),
        ("C".to_string(), 0.5),
    ])
    .unwrap();

    assert_eq!(mass.sample(0.0), "A");
    assert_eq!(mass.sample(0.19), "A");
    assert_eq!(mass.sample(0.21), "B");
    assert_eq!(mass.sample(0.99), "C");
}

proptest! {
    #[test]
    fn arrival_pattern_invert_is_always_within_table_bounds(p in 0.0f64..=1.0) {
        let pattern = ArrivalPattern::new(vec![(-45, 0.0), (-10, 0.6), (0, 1.0)]).unwrap();
        let days = pattern.invert(p);
        prop_assert!(days >= -45.0);
        prop_assert!(days <= 0.0);
    }

    #[test]
    fn arrival_pattern_invert_is_monotone_non_decreasing(p1 in 0.0f64..=1.0, p2 in 0.0f64..=1.0) {
        let pattern = ArrivalPattern::new(vec![(-45, 0.0), (-10, 0.6), (0, 1.0)]).unwrap();
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        prop_assert!(pattern.invert(lo) <= pattern.invert(hi));
    }

    #[test]
    fn probability_mass_sample_is_always_one_of_the_configured_keys(u in 0.0f64..1.0) {
        let mass = ProbabilityMass::new(vec![
            ("A".to_string(), 0.2),
            ("B".to_string(), 0.3),
            ("C".to_string(), 0.5),
        ]).unwrap();
        let sampled = mass.sample(u).clone();
        prop_assert!(["A", "B", "C"].contains(&sampled.as_str()));
    }
}
