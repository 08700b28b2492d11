//! The booking request: the payload produced by a demand stream on each
//! generated event.

use crate::key::DemandStreamKey;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default party size used until a future extension models group bookings.
pub const DEFAULT_PARTY_SIZE: u32 = 1;

/// A single synthesized booking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub origin: String,
    pub destination: String,
    pub pos: String,
    pub departure_date: NaiveDate,
    pub request_datetime: NaiveDateTime,
    pub cabin: String,
    pub party_size: u32,
    pub channel: String,
    pub trip_type: String,
    pub stay_duration_days: i64,
    pub frequent_flyer_tier: String,
    /// Seconds since midnight, matching the unit the arrival-pattern CDF
    /// tables are configured in. `chrono::Duration` does not implement
    /// `Serialize`/`Deserialize` even with chrono's `serde` feature
    /// (only the calendar types do), so the value is stored as a plain
    /// `i64` and converted at use sites via
    /// [`preferred_departure_time_of_day`](Self::preferred_departure_time_of_day).
    pub preferred_departure_time_of_day_seconds: i64,
    pub willingness_to_pay: f64,
    pub value_of_time: f64,
    pub source_stream_key: DemandStreamKey,
}

impl BookingRequest {
    /// The preferred departure time of day as a [`Duration`] since
    /// midnight.
    pub fn preferred_departure_time_of_day(&self) -> Duration {
        Duration::seconds(self.preferred_departure_time_of_day_seconds)
    }
}
