//! Continuous cumulative distribution functions over a real-valued domain
//! (e.g. seconds-of-day for preferred departure time, currency units for
//! value-of-time), sampled by CDF inversion.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A continuous CDF: `(x, cumulative_probability)` points sorted ascending
/// by `x`, anchored at probability `0.0` and `1.0`.
///
/// # Example
/// ```
/// use travel_demand_core_rs::distributions::ContinuousCDF;
///
/// let cdf = ContinuousCDF::new(vec![(0.0, 0.0), (86_400.0, 1.0)]).unwrap();
/// assert_eq!(cdf.invert(0.5), 43_200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousCDF {
    points: Vec<(f64, f64)>,
}

impl ContinuousCDF {
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                field: "continuous_cdf",
            });
        }

        let first = points.first().unwrap().1;
        let last = points.last().unwrap().1;
        if first != 0.0 || last != 1.0 {
            return Err(ConfigError::CdfNotAnchored {
                field: "continuous_cdf",
                first,
                last,
            });
        }

        for (i, window) in points.windows(2).enumerate() {
            if window[1].1 < window[0].1 {
                return Err(ConfigError::NonMonotoneCdf {
                    field: "continuous_cdf",
                    index: i + 1,
                });
            }
        }

        Ok(Self { points })
    }

    /// Invert the CDF: given a cumulative probability in `[0, 1]`, return
    /// the corresponding `x` via piecewise-linear interpolation.
    pub fn invert(&self, probability: f64) -> f64 {
        let p = probability.clamp(0.0, 1.0);

        if p <= self.points[0].1 {
            return self.points[0].0;
        }
        let last = self.points.last().unwrap();
        if p >= last.1 {
            return last.0;
        }

        for window in self.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if p >= y0 && p <= y1 {
                if (y1 - y0).abs() < f64::EPSILON {
                    return x0;
                }
                let t = (p - y0) / (y1 - y0);
                return x0 + t * (x1 - x0);
            }
        }

        last.0
    }
}
