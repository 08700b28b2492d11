//! Demand stream identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable identifier for a demand stream: one (origin, destination,
/// departure date, cabin) tuple.
///
/// The serialized form (used as the stable key in logs and as the
/// `source_stream_key` carried on every generated request) is
/// `"ORG-DST YYYY-MMM-DD C"`, e.g. `"SIN-BKK 2010-Feb-08 Y"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DemandStreamKey {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub cabin: String,
}

impl DemandStreamKey {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
        cabin: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            cabin: cabin.into(),
        }
    }
}

impl fmt::Display for DemandStreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} {}",
            self.origin,
            self.destination,
            self.departure_date.format("%Y-%b-%d"),
            self.cabin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_stable_log_convention() {
        let key = DemandStreamKey::new(
            "SIN",
            "BKK",
            NaiveDate::from_ymd_opt(2010, 2, 8).unwrap(),
            "Y",
        );
        assert_eq!(key.to_string(), "SIN-BKK 2010-Feb-08 Y");
    }

    #[test]
    fn equality_and_ordering_are_structural() {
        let a = DemandStreamKey::new("SIN", "BKK", NaiveDate::from_ymd_opt(2010, 2, 8).unwrap(), "Y");
        let b = DemandStreamKey::new("SIN", "BKK", NaiveDate::from_ymd_opt(2010, 2, 8).unwrap(), "Y");
        let c = DemandStreamKey::new("SIN", "BKK", NaiveDate::from_ymd_opt(2010, 2, 9).unwrap(), "Y");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
}
