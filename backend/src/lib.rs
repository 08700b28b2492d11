//! Travel Demand Generation Engine - Rust Core
//!
//! Synthesizes a time-ordered stream of booking requests (and optional
//! cancellations) for downstream revenue-management, inventory, and
//! simulation components.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation
//! - **distributions**: Arrival pattern, probability mass, continuous CDF,
//!   and FRAT5 distribution objects
//! - **stream**: The per-segment demand stream and its two inter-arrival
//!   algorithms
//! - **event**: Booking requests, cancellations, and the merging event
//!   queue
//! - **manager**: The orchestrator that builds streams and drives the
//!   pop/regenerate loop
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. Events are emitted in strictly monotone timestamp order
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod characteristics;
pub mod config;
pub mod distributions;
pub mod error;
pub mod event;
pub mod key;
pub mod manager;
pub mod request;
pub mod rng;
pub mod segment;
pub mod stream;
pub mod time;

// Re-exports for convenience
pub use characteristics::{DemandCharacteristics, DemandDistribution};
pub use error::{ConfigError, EngineError, Result};
pub use event::{Cancellation, Event, EventKind, EventQueue};
pub use key::DemandStreamKey;
pub use manager::DemandManager;
pub use request::BookingRequest;
pub use rng::RngManager;
pub use segment::DemandSegment;
pub use stream::{wtp_from_draw, DemandStream, GenerationMethod, RandomGenerationContext};

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn travel_demand_core_rs(_py: Python, _m: &PyModule) -> PyResult<()> {
    Ok(())
}
