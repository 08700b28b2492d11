//! Parsed demand segments: the raw, unvalidated shape handed in from the
//! (out-of-scope) CSV parser, plus the expansion of one segment into one
//! demand stream per active calendar date.

use crate::characteristics::{DemandCharacteristics, DemandDistribution};
use crate::distributions::{ArrivalPattern, ContinuousCDF, Frat5Pattern, ProbabilityMass};
use crate::error::ConfigError;
use crate::key::DemandStreamKey;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw fields for one demand segment as handed in by the parser: the
/// fields of a single demand stream, plus a day-of-week activation mask
/// and a date range. The manager expands this into one stream per active
/// date in `[start_date, end_date]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandSegment {
    pub origin: String,
    pub destination: String,
    pub cabin: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Indexed by [`chrono::Weekday::num_days_from_monday`].
    pub active_weekdays: [bool; 7],

    pub arrival_pattern: Vec<(i64, f64)>,
    /// May be empty: an empty POS mass falls back to the manager's default
    /// POS mass, with a warning.
    pub pos_mass: Vec<(String, f64)>,
    pub channel_mass: Vec<(String, f64)>,
    pub trip_type_mass: Vec<(String, f64)>,
    pub stay_duration_mass: Vec<(i64, f64)>,
    pub frequent_flyer_mass: Vec<(String, f64)>,
    pub preferred_departure_time_cdf: Vec<(f64, f64)>,
    pub min_wtp: f64,
    pub value_of_time_cdf: Vec<(f64, f64)>,
    pub frat5_pattern: Option<Vec<(f64, f64)>>,

    pub mean_requests: f64,
    pub stddev_requests: f64,
}

impl DemandSegment {
    fn is_active(&self, date: NaiveDate) -> bool {
        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.active_weekdays[weekday_index]
    }

    /// Every calendar date in `[start_date, end_date]` whose weekday is
    /// marked active.
    pub fn active_dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut date = self.start_date;
        while date <= self.end_date {
            if self.is_active(date) {
                dates.push(date);
            }
            date += Duration::days(1);
        }
        dates
    }

    fn build_characteristics(
        &self,
        default_pos_mass: &ProbabilityMass<String>,
    ) -> Result<DemandCharacteristics, ConfigError> {
        let pos_mass = if self.pos_mass.is_empty() {
            warn!(
                origin = %self.origin,
                destination = %self.destination,
                "segment has no POS mass configured, falling back to default POS mass"
            );
            default_pos_mass.clone()
        } else {
            ProbabilityMass::new(self.pos_mass.clone())?
        };

        Ok(DemandCharacteristics {
            arrival_pattern: ArrivalPattern::new(self.arrival_pattern.clone())?,
            pos_mass,
            channel_mass: ProbabilityMass::new(self.channel_mass.clone())?,
            trip_type_mass: ProbabilityMass::new(self.trip_type_mass.clone())?,
            stay_duration_mass: ProbabilityMass::new(self.stay_duration_mass.clone())?,
            frequent_flyer_mass: ProbabilityMass::new(self.frequent_flyer_mass.clone())?,
            preferred_departure_time_cdf: ContinuousCDF::new(
                self.preferred_departure_time_cdf.clone(),
            )?,
            min_wtp: self.min_wtp,
            value_of_time_cdf: ContinuousCDF::new(self.value_of_time_cdf.clone())?,
            frat5_pattern: self
                .frat5_pattern
                .clone()
                .map(Frat5Pattern::new)
                .transpose()?,
        })
    }

    /// Expand this segment into one `(key, characteristics, distribution)`
    /// tuple per active date.
    pub fn expand(
        &self,
        default_pos_mass: &ProbabilityMass<String>,
    ) -> Result<Vec<(DemandStreamKey, DemandCharacteristics, DemandDistribution)>, ConfigError>
    {
        let characteristics = self.build_characteristics(default_pos_mass)?;
        let distribution = DemandDistribution::new(self.mean_requests, self.stddev_requests);

        Ok(self
            .active_dates()
            .into_iter()
            .map(|date| {
                let key = DemandStreamKey::new(
                    self.origin.clone(),
                    self.destination.clone(),
                    date,
                    self.cabin.clone(),
                );
                (key, characteristics.clone(), distribution)
            })
            .collect())
    }
}

/// `true` for every day of the week: convenience for segments that fly
/// every day.
pub fn every_weekday() -> [bool; 7] {
    [true; 7]
}

/// Build an activation mask from a set of active [`Weekday`]s.
pub fn weekday_mask(active: &[Weekday]) -> [bool; 7] {
    let mut mask = [false; 7];
    for day in active {
        mask[day.num_days_from_monday() as usize] = true;
    }
    mask
}
