//! On-disk record shape: one tagged record per event.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::fields::{EventDuration, EventId, Location, Owner, Participants, Title};

/// Fields common to every record.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BaseRecord {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub duration_minutes: u32,
    pub owner: String,
}

/// One serialized event.
///
/// The `type` tag names the variant explicitly: variant identity cannot be
/// inferred from the field set alone. Unknown fields in input documents are
/// ignored, so documents written by newer versions still decode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum EventRecord {
    Appointment {
        #[serde(flatten)]
        base: BaseRecord,
    },
    Meeting {
        #[serde(flatten)]
        base: BaseRecord,
        location: String,
        participants: Vec<String>,
    },
    Birthday {
        #[serde(flatten)]
        base: BaseRecord,
        celebrant: String,
    },
    Periodic {
        #[serde(flatten)]
        base: BaseRecord,
        interval_days: u32,
    },
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        let base = BaseRecord {
            id: event.id.as_str().to_string(),
            title: event.title.as_str().to_string(),
            start: event.start,
            duration_minutes: event.duration.as_minutes(),
            owner: event.owner.as_str().to_string(),
        };
        match &event.kind {
            EventKind::Appointment => EventRecord::Appointment { base },
            EventKind::Meeting {
                location,
                participants,
            } => EventRecord::Meeting {
                base,
                location: location.as_str().to_string(),
                participants: participants.names().to_vec(),
            },
            EventKind::Birthday { celebrant } => EventRecord::Birthday {
                base,
                celebrant: celebrant.clone(),
            },
            EventKind::Periodic { interval_days } => EventRecord::Periodic {
                base,
                interval_days: *interval_days,
            },
        }
    }
}

impl EventRecord {
    /// Rebuild the domain event, re-validating every field.
    ///
    /// Any violation aborts with [`Error::Decode`]; a record never
    /// half-decodes into an event.
    pub(crate) fn into_event(self) -> Result<Event> {
        match self {
            EventRecord::Appointment { base } => build(base, EventKind::Appointment),
            EventRecord::Meeting {
                base,
                location,
                participants,
            } => {
                let kind = EventKind::Meeting {
                    location: Location::new(location).map_err(as_decode)?,
                    participants: Participants::new(participants).map_err(as_decode)?,
                };
                build(base, kind)
            }
            EventRecord::Birthday { base, celebrant } => {
                build(base, EventKind::Birthday { celebrant })
            }
            EventRecord::Periodic {
                base,
                interval_days,
            } => build(base, EventKind::Periodic { interval_days }),
        }
    }
}

fn build(base: BaseRecord, kind: EventKind) -> Result<Event> {
    Ok(Event::with_id(
        EventId::new(base.id).map_err(as_decode)?,
        Title::new(base.title).map_err(as_decode)?,
        base.start,
        EventDuration::minutes(base.duration_minutes).map_err(as_decode)?,
        Owner::new(base.owner).map_err(as_decode)?,
        kind,
    ))
}

fn as_decode(err: Error) -> Error {
    Error::Decode(err.to_string())
}
