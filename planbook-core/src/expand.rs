//! Occurrence expansion: an event plus a query window yields the concrete
//! occurrences falling inside the window.
//!
//! An occurrence of a periodic event is a clone of the event with its start
//! advanced by a whole number of intervals; occurrences are ephemeral query
//! results and are never stored.

use chrono::Duration;

use crate::event::{Event, EventKind};
use crate::time_range::TimeRange;

/// Expand an event into its occurrences within `window`.
///
/// Single-occurrence kinds yield the event itself iff its start falls inside
/// the half-open window. Periodic events yield one clone per interval step
/// whose start falls inside the window, in ascending start order. The window
/// bounds the iteration, so the result is always finite.
pub fn occurrences(event: &Event, window: &TimeRange) -> Vec<Event> {
    match event.kind {
        EventKind::Periodic { interval_days } if interval_days > 0 => {
            let step = Duration::days(i64::from(interval_days));
            let mut found = Vec::new();
            let mut candidate = event.start;
            while candidate < window.end() {
                if candidate >= window.start() {
                    let mut occurrence = event.clone();
                    occurrence.start = candidate;
                    found.push(occurrence);
                }
                candidate += step;
            }
            found
        }
        // Appointment, Meeting, Birthday, and a periodic event with a zero
        // interval (which must not loop): at most the base occurrence.
        _ => {
            if window.contains(event.start) {
                vec![event.clone()]
            } else {
                Vec::new()
            }
        }
    }
}
