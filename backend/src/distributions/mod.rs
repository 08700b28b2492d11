//! Distribution objects used to parameterize demand streams: the arrival
//! pattern CDF, discrete probability masses, continuous CDFs, and the
//! FRAT5 price-elasticity curve.

mod arrival_pattern;
mod continuous_cdf;
mod frat5;
mod probability_mass;

pub use arrival_pattern::ArrivalPattern;
pub use continuous_cdf::ContinuousCDF;
pub use frat5::Frat5Pattern;
pub use probability_mass::ProbabilityMass;
