//! JSON codec for the calendar document.
//!
//! Events serialize to a flat array of tagged records; the `type` field
//! names the event kind explicitly so the exact variant survives a
//! round-trip.

mod decode;
mod encode;
mod record;

pub use decode::deserialize_events;
pub use encode::serialize_events;
