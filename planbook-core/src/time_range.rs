//! Half-open time window for occurrence queries.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// A half-open `[start, end)` window used to bound occurrence queries.
///
/// Windows are query-time values; they are never stored with events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::validation(
                "time range",
                "start must not be after end",
            ));
        }
        Ok(TimeRange { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether an instant falls inside the window: `start` is inclusive,
    /// `end` exclusive.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}
