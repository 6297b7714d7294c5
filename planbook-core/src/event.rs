//! Event model: common fields plus the closed set of event kinds.

use std::fmt;

use chrono::NaiveDateTime;

use crate::fields::{EventDuration, EventId, Location, Owner, Participants, Title};

/// A calendar event.
///
/// Events are immutable once stored; editing means removing the old event
/// and adding a replacement under a new id.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: Title,
    pub start: NaiveDateTime,
    pub duration: EventDuration,
    pub owner: Owner,
    pub kind: EventKind,
}

/// The closed set of event kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A single point-in-time entry with no extra fields.
    Appointment,
    /// A single occurrence with a location and at least one participant.
    Meeting {
        location: Location,
        participants: Participants,
    },
    /// A single occurrence celebrating someone (free text, may be empty).
    Birthday { celebrant: String },
    /// Repeats every `interval_days` days from its start. An interval of 0
    /// never repeats: the event is a degenerate single occurrence.
    Periodic { interval_days: u32 },
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: Title,
        start: NaiveDateTime,
        duration: EventDuration,
        owner: Owner,
        kind: EventKind,
    ) -> Self {
        Self::with_id(EventId::generate(), title, start, duration, owner, kind)
    }

    /// Create an event with a caller-supplied id (used when decoding a
    /// persisted document).
    pub fn with_id(
        id: EventId,
        title: Title,
        start: NaiveDateTime,
        duration: EventDuration,
        owner: Owner,
        kind: EventKind,
    ) -> Self {
        Event {
            id,
            title,
            start,
            duration,
            owner,
            kind,
        }
    }

    /// The instant the event ends: start plus duration.
    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration.to_chrono()
    }

    /// Short label for the event kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Appointment => "appointment",
            EventKind::Meeting { .. } => "meeting",
            EventKind::Birthday { .. } => "birthday",
            EventKind::Periodic { .. } => "periodic",
        }
    }

    /// Stable human-readable description including the title, the owner and
    /// the kind-specific fields.
    pub fn describe(&self) -> String {
        let when = self.start.format("%Y-%m-%d at %H:%M");
        match &self.kind {
            EventKind::Appointment => format!(
                "Appointment: {} (owner: {}) on {}",
                self.title, self.owner, when
            ),
            EventKind::Meeting {
                location,
                participants,
            } => format!(
                "Meeting: {} (owner: {}) on {} at {} with {}",
                self.title, self.owner, when, location, participants
            ),
            EventKind::Birthday { celebrant } => format!(
                "Birthday: {} (owner: {}) on {} for {}",
                self.title, self.owner, when, celebrant
            ),
            EventKind::Periodic { interval_days } => format!(
                "Periodic event: {} (owner: {}) from {} every {} day(s)",
                self.title, self.owner, when, interval_days
            ),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
