//! FRAT5 pattern: a price-elasticity curve relating advance-purchase
//! position to willingness-to-pay dispersion.
//!
//! Unlike [`super::ContinuousCDF`], a FRAT5 pattern is evaluated forward —
//! given an advance-purchase proportion `p` in `[0, 1]`, it returns a
//! coefficient (1.0 means deterministic WTP, larger values mean a
//! heavier-tailed WTP distribution). It is not inverted by a uniform draw.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frat5Pattern {
    points: Vec<(f64, f64)>,
}

impl Frat5Pattern {
    /// Build a pattern from `(advance_purchase_proportion, coefficient)`
    /// points sorted ascending by proportion.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::EmptyDistribution { field: "frat5" });
        }
        for (i, window) in points.windows(2).enumerate() {
            if window[1].0 < window[0].0 {
                return Err(ConfigError::NonMonotoneCdf {
                    field: "frat5",
                    index: i + 1,
                });
            }
        }
        Ok(Self { points })
    }

    /// A constant pattern that always returns `coefficient`, handy for
    /// scenarios and tests that do not model elasticity explicitly.
    pub fn constant(coefficient: f64) -> Self {
        Self {
            points: vec![(0.0, coefficient), (1.0, coefficient)],
        }
    }

    /// Evaluate the coefficient at a given advance-purchase proportion via
    /// piecewise-linear interpolation, clamped at the boundaries.
    pub fn coefficient_at(&self, p: f64) -> f64 {
        if p <= self.points[0].0 {
            return self.points[0].1;
        }
        let last = self.points.last().unwrap();
        if p >= last.0 {
            return last.1;
        }

        for window in self.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if p >= x0 && p <= x1 {
                if (x1 - x0).abs() < f64::EPSILON {
                    return y0;
                }
                let t = (p - x0) / (x1 - x0);
                return y0 + t * (y1 - y0);
            }
        }

        last.1
    }
}
