//! Named constants that would otherwise be magic numbers scattered across
//! the generation algorithms.

/// Ceiling on advance-purchase (in days before departure) used to normalize
/// the advance-purchase proportion fed into the FRAT5 lookup in
/// [`crate::stream::DemandStream`]'s willingness-to-pay draw.
///
/// No authoritative value is recoverable from the distilled specification;
/// 365 days covers any realistic booking horizon without distorting the
/// FRAT5 curve's near-departure shape, see `DESIGN.md`.
pub const MAX_ADVANCE_PURCHASE_DAYS: f64 = 365.0;

/// Probability that a generated booking request is cancelled before
/// departure.
pub const CANCELLATION_PROBABILITY: f64 = 0.5;

/// Minimum inter-arrival time drawn by the exponential/Poisson-thinning
/// algorithm, in whole seconds.
pub const MIN_INTER_ARRIVAL_SECONDS: i64 = 1;
