//! Discrete probability mass functions over an ordered category type.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

const SUM_TOLERANCE: f64 = 1e-9;

/// A discrete probability mass function over category `K`.
///
/// Categories are kept sorted so that sampling is a deterministic function
/// of the uniform draw alone, independent of the order entries were
/// supplied in (a `HashMap`'s iteration order is not stable across runs and
/// would silently break reproducibility).
///
/// # Example
/// ```
/// use travel_demand_core_rs::distributions::ProbabilityMass;
///
/// let mass = ProbabilityMass::new(vec![
///     ("ECONOMY".to_string(), 0.75),
///     ("BUSINESS".to_string(), 0.25),
/// ]).unwrap();
/// assert_eq!(mass.sample(0.0), "BUSINESS");
/// assert_eq!(mass.sample(0.99), "ECONOMY");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMass<K: Ord + Clone> {
    entries: Vec<(K, f64)>,
}

impl<K: Ord + Clone> ProbabilityMass<K> {
    /// Build a mass function, validating that probabilities sum to 1.0
    /// within [`SUM_TOLERANCE`].
    pub fn new(mut entries: Vec<(K, f64)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyDistribution {
                field: "probability_mass",
            });
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let sum: f64 = entries.iter().map(|(_, p)| p).sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::MassDoesNotSumToOne {
                field: "probability_mass",
                sum,
                tolerance: SUM_TOLERANCE,
            });
        }

        Ok(Self { entries })
    }

    /// Sample a category by inverse-CDF: walk the sorted keys accumulating
    /// probability mass and return the first key whose cumulative sum is
    /// `>= u`. `u` should come from a uniform `[0, 1)` draw.
    pub fn sample(&self, u: f64) -> &K {
        let mut cumulative = 0.0;
        for (key, probability) in &self.entries {
            cumulative += probability;
            if cumulative >= u {
                return key;
            }
        }
        // Floating point rounding can leave the accumulated sum a hair
        // under 1.0; fall back to the last category rather than panic.
        &self.entries.last().unwrap().0
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
