//! Error types for the demand generation engine.
//!
//! Configuration problems are caught at build time and are meant to be
//! surfaced to the caller; the remaining variants represent programming
//! errors (misuse of the generator API) and are fatal by design — there is
//! no recovery path for popping an empty queue or drawing from an exhausted
//! stream.

use thiserror::Error;

/// Errors raised while assembling demand streams from parsed segments.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("probability mass for {field} sums to {sum}, expected 1.0 (tolerance {tolerance})")]
    MassDoesNotSumToOne {
        field: &'static str,
        sum: f64,
        tolerance: f64,
    },

    #[error("{field} is not monotone non-decreasing at index {index}")]
    NonMonotoneCdf { field: &'static str, index: usize },

    #[error("{field} must start at 0.0 and end at 1.0, got [{first}, {last}]")]
    CdfNotAnchored {
        field: &'static str,
        first: f64,
        last: f64,
    },

    #[error("{field} must not be empty")]
    EmptyDistribution { field: &'static str },

    #[error("duplicate demand stream key: {key}")]
    DuplicateStreamKey { key: String },
}

/// Fatal runtime errors: calling the generator in a way its invariants
/// forbid.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("generate_next called on exhausted stream {key}")]
    ExhaustedStream { key: String },

    #[error("pop_event called on an empty queue")]
    EmptyQueue,

    #[error("order-statistic draw has no remaining requests (n - k + 1 <= 0) for stream {key}")]
    NumericError { key: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
