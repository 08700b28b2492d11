//! EventQueue ordering, collision-nudging, and progress accounting.

use chrono::{Duration, NaiveDate};
use travel_demand_core_rs::{BookingRequest, DemandStreamKey, Event, EventKind, EventQueue};

fn key() -> DemandStreamKey {
    DemandStreamKey::new(
        "SIN",
        "BKK",
        NaiveDate::from_ymd_opt(2010, 2, 8).unwrap(),
        "Y",
    )
}

fn request_at(time: chrono::NaiveDateTime) -> Event {
    let key = key();
    Event::BookingRequest(BookingRequest {
        origin: key.origin.clone(),
        destination: key.destination.clone(),
        pos: "SIN".to_string(),
        departure_date: key.departure_date,
        request_datetime: time,
        cabin: key.cabin.clone(),
        party_size: 1,
        channel: "DN".to_string(),
        trip_type: "RO".to_string(),
        stay_duration_days: 7,
        frequent_flyer_tier: "N".to_string(),
        preferred_departure_time_of_day_seconds: 8 * 3600,
        willingness_to_pay: 500.0,
        value_of_time: 1.0,
        source_stream_key: key,
    })
}

#[test]
fn pop_order_is_strictly_increasing_across_many_inserts() {
    let mut queue = EventQueue::new();
    let base = NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for i in (0..20).rev() {
        queue.add_event(request_at(base + Duration::minutes(i)));
    }

    let mut previous = None;
    while !queue.is_empty() {
        let event = queue.pop_next().unwrap();
        if let Some(prev) = previous {
            assert!(event.event_time() > prev);
        }
        previous = Some(event.event_time());
    }
}

#[test]
fn repeated_collisions_each_nudge_by_one_millisecond() {
    let mut queue = EventQueue::new();
    let t = NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let mut timestamps = Vec::new();
    for _ in 0..5 {
        timestamps.push(queue.add_event(request_at(t)));
    }

    for window in timestamps.windows(2) {
        assert_eq!(window[1] - window[0], Duration::milliseconds(1));
    }
}

#[test]
fn status_tracks_expected_and_generated_independently_per_kind() {
    let mut queue = EventQueue::new();
    queue.add_status(EventKind::BookingRequest, 100);
    queue.add_status(EventKind::Cancellation, 40);
    queue.update_status(EventKind::BookingRequest, 30);

    assert_eq!(queue.expected_total(EventKind::BookingRequest), 100);
    assert_eq!(queue.generated_so_far(EventKind::BookingRequest), 30);
    assert_eq!(queue.expected_total(EventKind::Cancellation), 40);
    assert_eq!(queue.generated_so_far(EventKind::Cancellation), 0);
}
