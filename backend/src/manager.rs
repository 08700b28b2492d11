//! The demand manager: orchestrates demand stream construction, seeding,
//! and the pop/regenerate loop that drives the merged event queue.

use crate::config::CANCELLATION_PROBABILITY;
use crate::distributions::ProbabilityMass;
use crate::error::{ConfigError, EngineError};
use crate::event::{Cancellation, Event, EventKind, EventQueue};
use crate::key::DemandStreamKey;
use crate::request::DEFAULT_PARTY_SIZE;
use crate::rng::RngManager;
use crate::segment::DemandSegment;
use crate::stream::{DemandStream, GenerationMethod};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// Owns every demand stream and the event queue that merges them.
///
/// Streams are kept in a [`BTreeMap`], not a [`std::collections::HashMap`]:
/// both `reset()` and `generate_first_requests()` iterate `streams` while
/// drawing from a shared `master_rng` or priming a shared queue, so the
/// iteration order must be deterministic or those master-RNG draws (and
/// the queue's collision-nudge tie-breaking for same-timestamp events)
/// would vary from run to run even with the same seed. `DemandStreamKey`
/// already derives `Ord`.
pub struct DemandManager {
    streams: BTreeMap<DemandStreamKey, DemandStream>,
    queue: EventQueue,
}

impl DemandManager {
    /// Expand every segment into its per-date streams, seeding each
    /// stream's substreams and drawing its request quota from `master_rng`
    /// in a fixed order: time-RNG seed, characteristics-RNG seed, then the
    /// normal draw for the total request count.
    pub fn build_streams(
        segments: &[DemandSegment],
        master_rng: &mut RngManager,
        default_pos_mass: ProbabilityMass<String>,
    ) -> Result<Self, EngineError> {
        let mut streams = BTreeMap::new();
        let mut queue = EventQueue::new();

        for segment in segments {
            for (key, characteristics, distribution) in segment.expand(&default_pos_mass)? {
                if streams.contains_key(&key) {
                    return Err(ConfigError::DuplicateStreamKey {
                        key: key.to_string(),
                    }
                    .into());
                }

                let time_seed = master_rng.next_u32_seed();
                let characteristics_seed = master_rng.next_u32_seed();
                let stream = DemandStream::new(
                    key.clone(),
                    characteristics,
                    distribution,
                    time_seed,
                    characteristics_seed,
                    master_rng,
                );

                queue.add_status(EventKind::BookingRequest, stream.total_requests_to_generate() as u64);
                streams.insert(key, stream);
            }
        }

        Ok(Self { streams, queue })
    }

    /// Prime the queue with one event per stream that has a nonzero quota.
    /// Returns the summed expected request count across all streams.
    pub fn generate_first_requests(&mut self, method: GenerationMethod) -> Result<usize, EngineError> {
        for stream in self.streams.values_mut() {
            if stream.still_has_requests() {
                let request = stream.generate_next_request(method)?;
                self.queue.add_event(Event::BookingRequest(request));
                self.queue.update_status(EventKind::BookingRequest, 1);
            }
        }
        Ok(self.expected_total_requests())
    }

    /// Pop the next event; if it originated from a stream that still has
    /// requests, generate and enqueue that stream's next request.
    pub fn pop_event(&mut self, method: GenerationMethod) -> Result<Event, EngineError> {
        let popped = self.queue.pop_next()?;

        if matches!(popped, Event::BookingRequest(_)) {
            let source_key = popped.source_stream_key().clone();
            if let Some(stream) = self.streams.get_mut(&source_key) {
                if stream.still_has_requests() {
                    let request = stream.generate_next_request(method)?;
                    debug!(stream = %source_key, "regenerated request after pop");
                    self.queue.add_event(Event::BookingRequest(request));
                    self.queue.update_status(EventKind::BookingRequest, 1);
                }
            }
        }

        Ok(popped)
    }

    /// With probability [`CANCELLATION_PROBABILITY`], produce a cancellation
    /// whose time is uniform on `[request_time, departure_midnight]`
    /// (clamped to zero duration if `request_time` is already past
    /// midnight on the departure date).
    pub fn generate_cancellation(
        &self,
        affected_class_ids: Vec<String>,
        request_time: NaiveDateTime,
        departure_date: NaiveDate,
        source_stream_key: DemandStreamKey,
        generator: &mut RngManager,
    ) -> Option<Event> {
        if generator.next_f64() >= CANCELLATION_PROBABILITY {
            return None;
        }

        let departure_midnight = departure_date.and_hms_opt(0, 0, 0).unwrap();
        let window = (departure_midnight - request_time).num_milliseconds().max(0);
        let offset = Duration::milliseconds((generator.next_f64() * window as f64) as i64);

        Some(Event::Cancellation(Cancellation {
            cancellation_datetime: request_time + offset,
            request_datetime: request_time,
            departure_date,
            party_size: DEFAULT_PARTY_SIZE,
            class_ids: affected_class_ids,
            source_stream_key,
        }))
    }

    /// Clear the queue and reset every stream, redrawing each stream's
    /// request quota from `master_rng` and re-registering the new expected
    /// totals.
    pub fn reset(&mut self, master_rng: &mut RngManager) {
        self.queue.reset();
        for stream in self.streams.values_mut() {
            stream.reset(master_rng);
            self.queue
                .add_status(EventKind::BookingRequest, stream.total_requests_to_generate() as u64);
        }
    }

    pub fn expected_total_requests(&self) -> usize {
        self.streams
            .values()
            .map(|s| s.total_requests_to_generate() as usize)
            .sum()
    }

    pub fn still_generating(&self, stream_key: &DemandStreamKey) -> bool {
        self.streams
            .get(stream_key)
            .map(|s| s.still_has_requests())
            .unwrap_or(false)
    }

    pub fn is_queue_done(&self) -> bool {
        self.queue.is_empty() && self.streams.values().all(|s| !s.still_has_requests())
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }
}
