//! Owner-scoped interval overlap between stored events.

use crate::event::Event;

/// Whether two stored events conflict.
///
/// Events of different owners never conflict. Otherwise the base
/// `[start, start + duration)` intervals are tested for strict overlap, so
/// back-to-back events do not conflict. Periodic events are checked at their
/// base time only, never against their expanded occurrences.
pub fn in_conflict(a: &Event, b: &Event) -> bool {
    if a.owner != b.owner {
        return false;
    }
    a.start < b.end() && a.end() > b.start
}
