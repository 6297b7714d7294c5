//! Serialize events to the tagged JSON document.

use crate::error::{Error, Result};
use crate::event::Event;

use super::record::EventRecord;

/// Serialize events to a pretty-printed JSON array of tagged records.
pub fn serialize_events(events: &[Event]) -> Result<String> {
    let records: Vec<EventRecord> = events.iter().map(EventRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(|e| Error::Serialization(e.to_string()))
}
