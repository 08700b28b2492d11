//! Arrival pattern: the cumulative distribution of request times over
//! days-to-departure.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Cumulative distribution of booking requests over days-to-departure.
///
/// Points are `(days_to_departure, cumulative_probability)`, sorted
/// ascending by day (most negative first). Day 0 is the departure day
/// itself. The first point's probability must be 0.0 and the last point's
/// probability must be 1.0, with non-decreasing probability in between.
///
/// # Example
/// ```
/// use travel_demand_core_rs::distributions::ArrivalPattern;
///
/// let pattern = ArrivalPattern::new(vec![(-30, 0.0), (0, 1.0)]).unwrap();
/// assert_eq!(pattern.invert(0.0), -30.0);
/// assert_eq!(pattern.invert(1.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalPattern {
    points: Vec<(i64, f64)>,
}

impl ArrivalPattern {
    /// Build an arrival pattern from `(day, cumulative_probability)` pairs,
    /// already sorted ascending by day.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the points are empty, not anchored at
    /// `[0.0, 1.0]`, or not monotone non-decreasing.
    pub fn new(points: Vec<(i64, f64)>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                field: "arrival_pattern",
            });
        }

        let first = points.first().unwrap().1;
        let last = points.last().unwrap().1;
        if first != 0.0 || last != 1.0 {
            return Err(ConfigError::CdfNotAnchored {
                field: "arrival_pattern",
                first,
                last,
            });
        }

        for (i, window) in points.windows(2).enumerate() {
            if window[1].1 < window[0].1 {
                return Err(ConfigError::NonMonotoneCdf {
                    field: "arrival_pattern",
                    index: i + 1,
                });
            }
        }

        Ok(Self { points })
    }

    /// Invert the distribution: given a cumulative probability in `[0, 1]`,
    /// return the corresponding days-to-departure via piecewise-linear
    /// interpolation. Values outside `[0, 1]` are clamped to the nearest
    /// endpoint.
    pub fn invert(&self, probability: f64) -> f64 {
        let p = probability.clamp(0.0, 1.0);

        if p <= self.points[0].1 {
            return self.points[0].0 as f64;
        }
        let last = self.points.last().unwrap();
        if p >= last.1 {
            return last.0 as f64;
        }

        for window in self.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if p >= y0 && p <= y1 {
                if (y1 - y0).abs() < f64::EPSILON {
                    return x0 as f64;
                }
                let t = (p - y0) / (y1 - y0);
                return x0 as f64 + t * (x1 - x0) as f64;
            }
        }

        last.0 as f64
    }

    /// Instantaneous rate `dF/dt` at a given days-to-departure value,
    /// evaluated as the slope of the piecewise-linear segment containing
    /// `days`. Values outside the table's range use the slope of the
    /// nearest segment (flat extrapolation of the boundary rate).
    pub fn derivative(&self, days: f64) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        if days <= self.points[0].0 as f64 {
            return self.segment_slope(0);
        }
        let last_index = self.points.len() - 2;
        if days >= self.points.last().unwrap().0 as f64 {
            return self.segment_slope(last_index);
        }

        for (i, window) in self.points.windows(2).enumerate() {
            let (x0, _) = window[0];
            let (x1, _) = window[1];
            if days >= x0 as f64 && days <= x1 as f64 {
                return self.segment_slope(i);
            }
        }

        self.segment_slope(last_index)
    }

    fn segment_slope(&self, index: usize) -> f64 {
        let (x0, y0) = self.points[index];
        let (x1, y1) = self.points[index + 1];
        let dx = (x1 - x0) as f64;
        if dx.abs() < f64::EPSILON {
            0.0
        } else {
            (y1 - y0) / dx
        }
    }

    /// The earliest day (most negative) with nonzero support.
    pub fn earliest_day(&self) -> i64 {
        self.points[0].0
    }
}
