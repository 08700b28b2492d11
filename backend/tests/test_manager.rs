//! DemandManager orchestration: building streams from segments, the
//! pop/regenerate loop, and reset.

use chrono::NaiveDate;
use travel_demand_core_rs::distributions::ProbabilityMass;
use travel_demand_core_rs::segment::every_weekday;
use travel_demand_core_rs::{DemandManager, DemandSegment, DemandStreamKey, Event, GenerationMethod, RngManager};

fn default_pos() -> ProbabilityMass<String> {
    ProbabilityMass::new(vec![("SIN".to_string(), 1.0)]).unwrap()
}

fn segment(origin: &str, destination: &str, date: NaiveDate, mean: f64) -> DemandSegment {
    DemandSegment {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cabin: "Y".to_string(),
        start_date: date,
        end_date: date,
        active_weekdays: every_weekday(),
        arrival_pattern: vec![(-30, 0.0), (0, 1.0)],
        pos_mass: vec![("SIN".to_string(), 1.0)],
        channel_mass: vec![("DN".to_string(), 1.0)],
        trip_type_mass: vec![("RO".to_string(), 1.0)],
        stay_duration_mass: vec![(7, 1.0)],
        frequent_flyer_mass: vec![("N".to_string(), 1.0)],
        preferred_departure_time_cdf: vec![(0.0, 0.0), (86_400.0, 1.0)],
        min_wtp: 400.0,
        value_of_time_cdf: vec![(0.0, 0.0), (1.0, 1.0)],
        frat5_pattern: None,
        mean_requests: mean,
        stddev_requests: 0.0,
    }
}

#[test]
fn full_pop_loop_drains_every_stream_to_its_expected_total() {
    let date = NaiveDate::from_ymd_opt(2010, 2, 8).unwrap();
    let segments = vec![segment("SIN", "BKK", date, 12.0)];
    let mut master = RngManager::new(123);
    let mut manager = DemandManager::build_streams(&segments, &mut master, default_pos()).unwrap();
    let expected = manager.expected_total_requests();

    manager
        .generate_first_requests(GenerationMethod::StatisticOrder)
        .unwrap();

    let mut popped = 0;
    while !manager.is_queue_done() {
        let event = manager
            .pop_event(GenerationMethod::StatisticOrder)
            .unwrap();
        assert!(matches!(event, Event::BookingRequest(_)));
        popped += 1;
    }

    assert_eq!(popped, expected);
}

#[test]
fn pop_on_empty_queue_is_a_fatal_error() {
    let date = NaiveDate::from_ymd_opt(2010, 2, 8).unwrap();
    let segments = vec![segment("SIN", "BKK", date, 0.0)];
    let mut master = RngManager::new(1);
    let mut manager = DemandManager::build_streams(&segments, &mut master, default_pos()).unwrap();
    manager
        .generate_first_requests(GenerationMethod::StatisticOrder)
        .unwrap();
    assert!(manager.pop_event(GenerationMethod::StatisticOrder).is_err());
}

#[test]
fn reset_reproduces_identical_first_event_per_stream() {
    let date = NaiveDate::from_ymd_opt(2010, 2, 8).unwrap();
    let segments = vec![segment("SIN", "BKK", date, 8.0)];
    let seed = 777;

    let mut master1 = RngManager::new(seed);
    let mut manager1 = DemandManager::build_streams(&segments, &mut master1, default_pos()).unwrap();
    manager1
        .generate_first_requests(GenerationMethod::StatisticOrder)
        .unwrap();
    let first_run_first_event = manager1
        .pop_event(GenerationMethod::StatisticOrder)
        .unwrap();

    let mut master2 = RngManager::new(seed);
    let mut manager2 = DemandManager::build_streams(&segments, &mut master2, default_pos()).unwrap();
    manager2
        .generate_first_requests(GenerationMethod::StatisticOrder)
        .unwrap();
    let second_run_first_event = manager2
        .pop_event(GenerationMethod::StatisticOrder)
        .unwrap();

    assert_eq!(first_run_first_event, second_run_first_event);
}

#[test]
fn still_generating_is_false_for_unknown_stream_key() {
    let date = NaiveDate::from_ymd_opt(2010, 2, 8).unwrap();
    let segments = vec![segment("SIN", "BKK", date, 5.0)];
    let mut master = RngManager::new(1);
    let manager = DemandManager::build_streams(&segments, &mut master, default_pos()).unwrap();

    let unknown = DemandStreamKey::new("LAX", "JFK", date, "J");
    assert!(!manager.still_generating(&unknown));
}
