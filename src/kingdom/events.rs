//! Events and the chronicle log

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::types::Year;
use crate::kingdom::noble::NobleSnapshot;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[display(fmt = "death")]
    Death,
    #[display(fmt = "ascension")]
    Ascension,
    #[display(fmt = "war")]
    War,
    #[display(fmt = "monument")]
    Monument,
    #[display(fmt = "review")]
    Review,
    #[display(fmt = "combat")]
    Combat,
    #[display(fmt = "evolution")]
    Evolution,
}

/// Running tally of a war, frozen at the time of the event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarStats {
    pub casualties: u32,
    pub victories: u32,
    pub defeats: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noble: Option<NobleSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war_stats: Option<WarStats>,
}

impl EventDetails {
    pub fn noble(noble: NobleSnapshot) -> Self {
        Self { noble: Some(noble), war_stats: None }
    }

    pub fn war(stats: WarStats) -> Self {
        Self { noble: None, war_stats: Some(stats) }
    }
}

/// One entry of the chronicle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationEvent {
    pub year: Year,
    pub kind: EventKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
}

/// Append-only chronicle of a run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GenerationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, year: Year, kind: EventKind, message: String, details: Option<EventDetails>) {
        self.events.push(GenerationEvent { year, kind, message, details });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    /// Events appended at or after `start`
    pub fn since(&self, start: usize) -> &[GenerationEvent] {
        self.events.get(start..).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenerationEvent> {
        self.events.iter()
    }

    pub fn events_for_year(&self, year: Year) -> impl Iterator<Item = &GenerationEvent> {
        self.events.iter().filter(move |e| e.year == year)
    }

    pub fn events_of_kind(&self, kind: EventKind) -> impl Iterator<Item = &GenerationEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn count_of_kind(&self, kind: EventKind) -> usize {
        self.events_of_kind(kind).count()
    }
}
