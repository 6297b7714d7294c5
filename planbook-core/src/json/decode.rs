//! Decode a calendar document back into events.

use crate::error::{Error, Result};
use crate::event::Event;

use super::record::EventRecord;

/// Decode a calendar document.
///
/// A blank document decodes to no events. Any record that fails to parse or
/// whose fields fail validation aborts the whole decode with
/// [`Error::Decode`].
pub fn deserialize_events(document: &str) -> Result<Vec<Event>> {
    if document.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<EventRecord> =
        serde_json::from_str(document).map_err(|e| Error::Decode(e.to_string()))?;

    records.into_iter().map(EventRecord::into_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::fields::{EventDuration, Location, Owner, Participants, Title};
    use crate::json::serialize_events;
    use chrono::{NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 17)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn event(kind: EventKind) -> Event {
        Event::new(
            Title::new("Project sync").unwrap(),
            start(),
            EventDuration::minutes(45).unwrap(),
            Owner::new("alice").unwrap(),
            kind,
        )
    }

    fn roundtrip(original: Event) -> Event {
        let document = serialize_events(std::slice::from_ref(&original)).unwrap();
        let mut decoded = deserialize_events(&document).unwrap();
        assert_eq!(decoded.len(), 1, "Exactly one event should come back");
        decoded.pop().unwrap()
    }

    #[test]
    fn appointment_roundtrips_losslessly() {
        let original = event(EventKind::Appointment);
        assert_eq!(roundtrip(original.clone()), original);
    }

    #[test]
    fn meeting_roundtrips_losslessly() {
        let original = event(EventKind::Meeting {
            location: Location::new("Room A").unwrap(),
            participants: Participants::new(vec!["X".to_string(), "Y".to_string()]).unwrap(),
        });
        assert_eq!(roundtrip(original.clone()), original);
    }

    #[test]
    fn birthday_roundtrips_losslessly() {
        let original = event(EventKind::Birthday {
            celebrant: "Marie".to_string(),
        });
        assert_eq!(roundtrip(original.clone()), original);
    }

    #[test]
    fn birthday_with_empty_celebrant_roundtrips() {
        let original = event(EventKind::Birthday {
            celebrant: String::new(),
        });
        assert_eq!(roundtrip(original.clone()), original);
    }

    #[test]
    fn periodic_roundtrips_losslessly() {
        let original = event(EventKind::Periodic { interval_days: 7 });
        assert_eq!(roundtrip(original.clone()), original);
    }

    #[test]
    fn blank_document_decodes_to_no_events() {
        assert!(deserialize_events("").unwrap().is_empty());
        assert!(deserialize_events("  \n ").unwrap().is_empty());
        assert!(deserialize_events("[]").unwrap().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let document = r#"[{
            "type": "Appointment",
            "id": "evt-1",
            "title": "Dentist",
            "start": "2025-03-17T10:00:00",
            "duration_minutes": 30,
            "owner": "alice",
            "color": "teal",
            "priority": 3
        }]"#;

        let decoded = deserialize_events(document).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id.as_str(), "evt-1");
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = deserialize_events("{not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn missing_variant_tag_is_a_decode_error() {
        let document = r#"[{
            "id": "evt-1",
            "title": "Dentist",
            "start": "2025-03-17T10:00:00",
            "duration_minutes": 30,
            "owner": "alice"
        }]"#;
        assert!(matches!(
            deserialize_events(document),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn invalid_field_aborts_the_whole_decode() {
        // Second record carries a zero duration; nothing decodes.
        let document = r#"[
            {
                "type": "Appointment",
                "id": "evt-1",
                "title": "Dentist",
                "start": "2025-03-17T10:00:00",
                "duration_minutes": 30,
                "owner": "alice"
            },
            {
                "type": "Appointment",
                "id": "evt-2",
                "title": "Haircut",
                "start": "2025-03-18T10:00:00",
                "duration_minutes": 0,
                "owner": "alice"
            }
        ]"#;
        assert!(matches!(
            deserialize_events(document),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn meeting_without_participants_is_a_decode_error() {
        let document = r#"[{
            "type": "Meeting",
            "id": "evt-1",
            "title": "Standup",
            "start": "2025-03-17T10:00:00",
            "duration_minutes": 15,
            "owner": "alice",
            "location": "Room A",
            "participants": []
        }]"#;
        assert!(matches!(
            deserialize_events(document),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn blank_id_is_a_decode_error() {
        let document = r#"[{
            "type": "Appointment",
            "id": "  ",
            "title": "Dentist",
            "start": "2025-03-17T10:00:00",
            "duration_minutes": 30,
            "owner": "alice"
        }]"#;
        assert!(matches!(
            deserialize_events(document),
            Err(Error::Decode(_))
        ));
    }
}
