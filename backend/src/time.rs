//! Calendar time helpers shared by the demand stream algorithms.
//!
//! The simulation operates on wall-clock datetimes, not discrete ticks:
//! every booking request carries a real `NaiveDateTime`, and every demand
//! stream is anchored to a departure date at a fixed reference hour.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Hour of day used as the nominal departure time for every flight.
///
/// This is an intentional design constant inherited from the source system:
/// every departure is treated as if it occurs at 08:00 local reference time,
/// regardless of the flight's actual schedule.
pub const REFERENCE_DEPARTURE_HOUR: u32 = 8;

/// Seconds in one calendar day, used to convert fractional-day offsets.
pub const SECONDS_IN_ONE_DAY: f64 = 86_400.0;

/// Milliseconds in one second, used when splitting a fractional-day offset
/// into whole seconds and a millisecond remainder.
pub const MILLISECONDS_IN_ONE_SECOND: f64 = 1_000.0;

/// Build the nominal departure datetime for a given calendar date: the date
/// at [`REFERENCE_DEPARTURE_HOUR`]:00:00.
pub fn departure_datetime(departure_date: NaiveDate) -> NaiveDateTime {
    departure_date.and_time(
        NaiveTime::from_hms_opt(REFERENCE_DEPARTURE_HOUR, 0, 0)
            .expect("reference departure hour is a valid hour"),
    )
}

/// Convert a fractional number of days (typically negative, meaning "before
/// departure") into a calendar `Duration`.
///
/// The number of days is split into whole seconds and a millisecond
/// remainder; 1 ms is then added to the millisecond part. This guarantees
/// that two successive conversions of strictly increasing day offsets never
/// collide once added to the same base datetime, which is what lets the
/// order-statistic algorithm produce a monotone (soon to be strictly
/// monotone, once the event queue nudges ties) sequence of request times.
pub fn days_to_duration(number_of_days: f64) -> Duration {
    let total_seconds = number_of_days * SECONDS_IN_ONE_DAY;
    let whole_seconds = total_seconds.floor();
    let millis_remainder = (total_seconds - whole_seconds) * MILLISECONDS_IN_ONE_SECOND;
    let whole_millis = millis_remainder.floor() + 1.0;

    Duration::seconds(whole_seconds as i64) + Duration::milliseconds(whole_millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departure_datetime_uses_reference_hour() {
        let date = NaiveDate::from_ymd_opt(2010, 2, 8).unwrap();
        let dt = departure_datetime(date);
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn days_to_duration_is_negative_for_days_before_departure() {
        let d = days_to_duration(-1.0);
        assert!(d < Duration::zero());
    }

    #[test]
    fn days_to_duration_always_carries_a_millisecond_nudge() {
        // An exact whole number of days should still get the +1ms nudge,
        // which is what prevents same-day ties within a single stream.
        let d = days_to_duration(-2.0);
        assert_eq!(d, Duration::seconds(-2 * 86_400) + Duration::milliseconds(1));
    }
}
