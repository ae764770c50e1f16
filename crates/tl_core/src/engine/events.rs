//! Host-facing outputs of a tick: match updates, the bounded event log and
//! snapshots.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::models::MatchEvent;

/// Default number of events a host keeps.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 50;

/// Emitted on every whole-minute crossing and alongside every match event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchUpdate {
    pub minute: f32,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<MatchEvent>,
}

/// Newest-first event log that drops the oldest entries past capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    capacity: usize,
    events: VecDeque<MatchEvent>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_LOG_CAPACITY)
    }
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, events: VecDeque::with_capacity(capacity) }
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    pub fn latest(&self) -> Option<&MatchEvent> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_vec(&self) -> Vec<MatchEvent> {
        self.events.iter().cloned().collect()
    }
}

/// What a scoreboard needs: whole minute, score, recent events newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub minute: u32,
    pub home_score: u32,
    pub away_score: u32,
    pub events: Vec<MatchEvent>,
}
