//! Events produced by the generation engine, and the queue that merges all
//! demand streams into one chronologically ordered sequence.

use crate::error::EngineError;
use crate::key::DemandStreamKey;
use crate::request::BookingRequest;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cancellation of a previously generated booking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancellation {
    pub cancellation_datetime: NaiveDateTime,
    pub request_datetime: NaiveDateTime,
    pub departure_date: NaiveDate,
    pub party_size: u32,
    /// Fare class IDs affected by the cancellation.
    pub class_ids: Vec<String>,
    pub source_stream_key: DemandStreamKey,
}

/// A tagged simulation event, ordered by its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    BookingRequest(BookingRequest),
    Cancellation(Cancellation),
}

impl Event {
    pub fn event_time(&self) -> NaiveDateTime {
        match self {
            Event::BookingRequest(r) => r.request_datetime,
            Event::Cancellation(c) => c.cancellation_datetime,
        }
    }

    fn set_event_time(&mut self, time: NaiveDateTime) {
        match self {
            Event::BookingRequest(r) => r.request_datetime = time,
            Event::Cancellation(c) => c.cancellation_datetime = time,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::BookingRequest(_) => EventKind::BookingRequest,
            Event::Cancellation(_) => EventKind::Cancellation,
        }
    }

    pub fn source_stream_key(&self) -> &DemandStreamKey {
        match self {
            Event::BookingRequest(r) => &r.source_stream_key,
            Event::Cancellation(c) => &c.source_stream_key,
        }
    }
}

/// The two event kinds the queue tracks progress for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    BookingRequest,
    Cancellation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
struct Progress {
    generated_so_far: u64,
    expected_total: u64,
}

/// Merges every demand stream's events into a single, strictly
/// chronologically ordered sequence.
///
/// Backed by a `BTreeMap` keyed on timestamp: insertion nudges a
/// colliding timestamp forward by 1ms until it is unique, which both
/// guarantees total order and bounds the extra latency (collisions are
/// rare within a single stream and independent across streams).
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: BTreeMap<NaiveDateTime, Event>,
    progress: [Progress; 2],
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn progress_index(kind: EventKind) -> usize {
        match kind {
            EventKind::BookingRequest => 0,
            EventKind::Cancellation => 1,
        }
    }

    /// Insert an event, nudging its timestamp forward by 1ms on collision
    /// until it is unique. Returns the (possibly adjusted) timestamp under
    /// which the event was stored.
    pub fn add_event(&mut self, mut event: Event) -> NaiveDateTime {
        let mut timestamp = event.event_time();
        while self.events.contains_key(&timestamp) {
            timestamp += Duration::milliseconds(1);
        }
        event.set_event_time(timestamp);
        self.events.insert(timestamp, event);
        timestamp
    }

    /// Remove and return the event with the smallest timestamp.
    pub fn pop_next(&mut self) -> Result<Event, EngineError> {
        let key = *self.events.keys().next().ok_or(EngineError::EmptyQueue)?;
        Ok(self.events.remove(&key).expect("key just observed present"))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn add_status(&mut self, kind: EventKind, expected_delta: u64) {
        self.progress[Self::progress_index(kind)].expected_total += expected_delta;
    }

    pub fn update_status(&mut self, kind: EventKind, generated_delta: u64) {
        self.progress[Self::progress_index(kind)].generated_so_far += generated_delta;
    }

    pub fn expected_total(&self, kind: EventKind) -> u64 {
        self.progress[Self::progress_index(kind)].expected_total
    }

    pub fn generated_so_far(&self, kind: EventKind) -> u64 {
        self.progress[Self::progress_index(kind)].generated_so_far
    }

    pub fn reset(&mut self) {
        self.events.clear();
        self.progress = [Progress::default(); 2];
    }
}
