//! Demand characteristics: the bundle of distributions that parameterize a
//! single demand stream, plus the scalar parameters for its total request
//! count.

use crate::distributions::{ArrivalPattern, ContinuousCDF, Frat5Pattern, ProbabilityMass};
use serde::{Deserialize, Serialize};

/// All distributions needed to generate a single booking request, aside
/// from the timing algorithm itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandCharacteristics {
    pub arrival_pattern: ArrivalPattern,
    pub pos_mass: ProbabilityMass<String>,
    pub channel_mass: ProbabilityMass<String>,
    pub trip_type_mass: ProbabilityMass<String>,
    pub stay_duration_mass: ProbabilityMass<i64>,
    pub frequent_flyer_mass: ProbabilityMass<String>,
    pub preferred_departure_time_cdf: ContinuousCDF,
    pub min_wtp: f64,
    pub value_of_time_cdf: ContinuousCDF,
    pub frat5_pattern: Option<Frat5Pattern>,
}

impl DemandCharacteristics {
    /// The effective FRAT5 pattern: the configured one, or a constant
    /// pattern of 1.0 (deterministic WTP, no elasticity) when none was
    /// supplied.
    pub fn effective_frat5(&self) -> Frat5Pattern {
        self.frat5_pattern
            .clone()
            .unwrap_or_else(|| Frat5Pattern::constant(1.0))
    }
}

/// Scalar parameters for the total number of requests a stream will
/// generate: drawn once from `Normal(mean, stddev)` at stream
/// initialization (and again on every [`reset`](crate::stream::DemandStream::reset)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandDistribution {
    pub mean_requests: f64,
    pub stddev_requests: f64,
}

impl DemandDistribution {
    pub fn new(mean_requests: f64, stddev_requests: f64) -> Self {
        assert!(mean_requests >= 0.0, "mean_requests must be non-negative");
        assert!(
            stddev_requests >= 0.0,
            "stddev_requests must be non-negative"
        );
        Self {
            mean_requests,
            stddev_requests,
        }
    }
}
