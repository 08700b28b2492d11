//! The demand stream: one (origin, destination, departure date, cabin)
//! generator of booking requests, driven by two independent RNG substreams.

use crate::characteristics::{DemandCharacteristics, DemandDistribution};
use crate::config::MAX_ADVANCE_PURCHASE_DAYS;
use crate::error::EngineError;
use crate::key::DemandStreamKey;
use crate::request::{BookingRequest, DEFAULT_PARTY_SIZE};
use crate::rng::RngManager;
use crate::time::{days_to_duration, departure_datetime};
use chrono::{Duration, NaiveDateTime};

/// Which inter-arrival algorithm a stream uses to space out request times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMethod {
    /// Sequential generation in increasing order via the k-th order
    /// statistic of the arrival pattern.
    StatisticOrder,
    /// Exponential inter-arrival times with a rate derived from the local
    /// slope of the arrival pattern (Poisson thinning).
    Poisson,
}

/// Mutable progress state for a single stream's request generation,
/// independent of which algorithm is in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGenerationContext {
    requests_generated_so_far: i64,
    cumulative_probability_so_far: f64,
    last_event_time: Option<NaiveDateTime>,
    first_request_pending: bool,
}

impl RandomGenerationContext {
    fn new() -> Self {
        Self {
            requests_generated_so_far: 0,
            cumulative_probability_so_far: 0.0,
            last_event_time: None,
            first_request_pending: true,
        }
    }

    pub fn requests_generated_so_far(&self) -> i64 {
        self.requests_generated_so_far
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RandomGenerationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A single demand stream: generates [`BookingRequest`]s for one
/// (origin, destination, departure date, cabin) tuple until it has produced
/// its quota of requests.
#[derive(Debug, Clone)]
pub struct DemandStream {
    key: DemandStreamKey,
    characteristics: DemandCharacteristics,
    distribution: DemandDistribution,
    time_rng: RngManager,
    characteristics_rng: RngManager,
    context: RandomGenerationContext,
    total_requests_to_generate: i64,
}

impl DemandStream {
    /// Build a stream from its configuration and two independently seeded
    /// substreams, then draw its total request quota from `master_rng`.
    pub fn new(
        key: DemandStreamKey,
        characteristics: DemandCharacteristics,
        distribution: DemandDistribution,
        time_rng_seed: u32,
        characteristics_rng_seed: u32,
        master_rng: &mut RngManager,
    ) -> Self {
        let mut stream = Self {
            key,
            characteristics,
            distribution,
            time_rng: RngManager::new(time_rng_seed as u64),
            characteristics_rng: RngManager::new(characteristics_rng_seed as u64),
            context: RandomGenerationContext::new(),
            total_requests_to_generate: 0,
        };
        stream.init(master_rng);
        stream
    }

    /// Draw the total number of requests to generate this round from
    /// `Normal(mean, stddev)`, rounded to the nearest integer.
    fn init(&mut self, master_rng: &mut RngManager) {
        let draw = master_rng.normal(
            self.distribution.mean_requests,
            self.distribution.stddev_requests,
        );
        self.total_requests_to_generate = ((draw + 0.5).floor() as i64).max(0);
    }

    /// Reset progress and redraw the request quota, without touching the
    /// per-stream RNG substreams (those keep advancing across rounds).
    pub fn reset(&mut self, master_rng: &mut RngManager) {
        self.context.reset();
        self.init(master_rng);
    }

    pub fn key(&self) -> &DemandStreamKey {
        &self.key
    }

    pub fn total_requests_to_generate(&self) -> i64 {
        self.total_requests_to_generate.max(0)
    }

    pub fn requests_generated_so_far(&self) -> i64 {
        self.context.requests_generated_so_far
    }

    pub fn still_has_requests(&self) -> bool {
        self.total_requests_to_generate - self.context.requests_generated_so_far > 0
    }

    /// Generate the next booking request using the given inter-arrival
    /// algorithm, sampling every other attribute from the characteristics
    /// RNG in a fixed order: POS, channel, trip type, stay duration,
    /// frequent flyer tier, preferred departure time, value of time, then
    /// willingness to pay.
    pub fn generate_next_request(
        &mut self,
        method: GenerationMethod,
    ) -> Result<BookingRequest, EngineError> {
        if !self.still_has_requests() {
            return Err(EngineError::ExhaustedStream {
                key: self.key.to_string(),
            });
        }

        let pos = self
            .characteristics
            .pos_mass
            .sample(self.characteristics_rng.next_f64())
            .clone();

        let request_datetime = match method {
            GenerationMethod::StatisticOrder => self.generate_time_statistic_order()?,
            GenerationMethod::Poisson => self.generate_time_exponential()?,
        };

        let channel = self
            .characteristics
            .channel_mass
            .sample(self.characteristics_rng.next_f64())
            .clone();
        let trip_type = self
            .characteristics
            .trip_type_mass
            .sample(self.characteristics_rng.next_f64())
            .clone();
        let stay_duration_days = *self
            .characteristics
            .stay_duration_mass
            .sample(self.characteristics_rng.next_f64());
        let frequent_flyer_tier = self
            .characteristics
            .frequent_flyer_mass
            .sample(self.characteristics_rng.next_f64())
            .clone();
        let preferred_departure_time_of_day_seconds = self
            .characteristics
            .preferred_departure_time_cdf
            .invert(self.characteristics_rng.next_f64()) as i64;
        let value_of_time = self
            .characteristics
            .value_of_time_cdf
            .invert(self.characteristics_rng.next_f64());

        let willingness_to_pay =
            self.generate_wtp(request_datetime, stay_duration_days);

        self.context.requests_generated_so_far += 1;

        Ok(BookingRequest {
            origin: self.key.origin.clone(),
            destination: self.key.destination.clone(),
            pos,
            departure_date: self.key.departure_date,
            request_datetime,
            cabin: self.key.cabin.clone(),
            party_size: DEFAULT_PARTY_SIZE,
            channel,
            trip_type,
            stay_duration_days,
            frequent_flyer_tier,
            preferred_departure_time_of_day_seconds,
            willingness_to_pay,
            value_of_time,
            source_stream_key: self.key.clone(),
        })
    }

    /// Sequential generation in increasing order via the k-th order
    /// statistic of the arrival pattern:
    ///
    /// `F^-1_{X(k) | X(k-1)=x(k-1)}(y) = 1 - (1 - x(k-1))(1 - y)^(1/(n-k+1))`
    fn generate_time_statistic_order(&mut self) -> Result<NaiveDateTime, EngineError> {
        let remaining = self.total_requests_to_generate - self.context.requests_generated_so_far;
        if remaining <= 0 {
            return Err(EngineError::NumericError {
                key: self.key.to_string(),
            });
        }
        let remaining_rate = 1.0 / remaining as f64;
        let complement = 1.0 - self.context.cumulative_probability_so_far;

        let variate = self.time_rng.next_f64();
        let factor = (1.0 - variate).powf(remaining_rate);
        let cumulative_this_request = 1.0 - complement * factor;

        let days = self
            .characteristics
            .arrival_pattern
            .invert(cumulative_this_request);
        let request_datetime = departure_datetime(self.key.departure_date) + days_to_duration(days);

        self.context.cumulative_probability_so_far = cumulative_this_request;
        Ok(request_datetime)
    }

    /// Exponential inter-arrival times with a rate derived from the local
    /// slope of the arrival pattern at the previous request's
    /// days-to-departure (Poisson thinning).
    fn generate_time_exponential(&mut self) -> Result<NaiveDateTime, EngineError> {
        let departure = departure_datetime(self.key.departure_date);

        if self.context.first_request_pending {
            let days = self.characteristics.arrival_pattern.invert(0.0);
            let request_datetime = departure + days_to_duration(days);
            self.context.last_event_time = Some(request_datetime);
            self.context.first_request_pending = false;
            return Ok(request_datetime);
        }

        let last = self
            .context
            .last_event_time
            .expect("last_event_time is set once first_request_pending clears");

        let days_before_departure = (departure - last).num_milliseconds() as f64
            / crate::time::MILLISECONDS_IN_ONE_SECOND
            / crate::time::SECONDS_IN_ONE_DAY;

        let daily_rate = self.characteristics.arrival_pattern.derivative(-days_before_departure)
            * self.distribution.mean_requests;
        if daily_rate <= 0.0 {
            return Err(EngineError::NumericError {
                key: self.key.to_string(),
            });
        }

        let inter_arrival_days = self.time_rng.exponential(daily_rate);
        let inter_arrival_seconds = inter_arrival_days * crate::time::SECONDS_IN_ONE_DAY;
        let inter_arrival_seconds_int = if inter_arrival_seconds > 1.0 {
            inter_arrival_seconds as i64
        } else {
            crate::config::MIN_INTER_ARRIVAL_SECONDS
        };

        let request_datetime = last + Duration::seconds(inter_arrival_seconds_int);
        self.context.last_event_time = Some(request_datetime);
        Ok(request_datetime)
    }

    /// `WTP = minWTP * (1 + (frat5Coef - 1) * ln(U) / ln(0.5))`, where
    /// `frat5Coef` is looked up at the advance-purchase proportion
    /// `1 - AP/MAX_ADVANCE_PURCHASE_DAYS` (clamped at zero) and `U` is a
    /// fresh uniform draw from the characteristics substream.
    fn generate_wtp(&mut self, request_datetime: NaiveDateTime, _stay_duration_days: i64) -> f64 {
        let advance_purchase_days =
            (self.key.departure_date - request_datetime.date()).num_days() as f64;
        let advance_purchase_proportion =
            (1.0 - advance_purchase_days / MAX_ADVANCE_PURCHASE_DAYS).max(0.0);

        let frat5_coefficient = self
            .characteristics
            .effective_frat5()
            .coefficient_at(advance_purchase_proportion);

        let u = self.characteristics_rng.next_f64().max(f64::MIN_POSITIVE);
        wtp_from_draw(self.characteristics.min_wtp, frat5_coefficient, u)
    }
}

/// Pure core of the WTP formula, isolated so it can be checked directly
/// against the worked example without needing to predict an RNG draw.
pub fn wtp_from_draw(min_wtp: f64, frat5_coefficient: f64, u: f64) -> f64 {
    min_wtp * (1.0 + (frat5_coefficient - 1.0) * u.ln() / 0.5f64.ln())
}
