//! Validated field types shared by every event kind.
//!
//! Each type wraps one primitive and checks its invariant on construction,
//! so an `Event` can only ever hold well-formed data.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Event title. Never empty or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        Ok(Title(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The person responsible for an event. Conflict detection is scoped per
/// owner, so two events can only ever conflict when their owners are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::validation("owner", "must not be empty"));
        }
        Ok(Owner(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a meeting takes place. Never empty or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::validation("location", "must not be empty"));
        }
        Ok(Location(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event duration in minutes. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDuration(u32);

impl EventDuration {
    pub fn minutes(minutes: u32) -> Result<Self> {
        if minutes == 0 {
            return Err(Error::validation("duration", "must be at least one minute"));
        }
        Ok(EventDuration(minutes))
    }

    pub fn as_minutes(&self) -> u32 {
        self.0
    }

    /// The chrono equivalent, for start/end arithmetic.
    pub fn to_chrono(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// Names of the people attending a meeting. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants(Vec<String>);

impl Participants {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::validation(
                "participants",
                "at least one participant is required",
            ));
        }
        Ok(Participants(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Participants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Opaque unique event identifier. Generated once at creation, stable for
/// the event's lifetime, and the sole lookup/removal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::validation("id", "must not be blank"));
        }
        Ok(EventId(value))
    }

    /// A fresh process-wide-unique id.
    pub fn generate() -> Self {
        EventId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a start instant from a calendar date plus hour and minute parts.
pub fn start_at(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    date.and_hms_opt(hour, minute, 0).ok_or_else(|| {
        Error::validation("start", format!("invalid time of day {hour:02}:{minute:02}"))
    })
}
