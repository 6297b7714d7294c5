//! Shared constants.

/// Default forward window for the agenda, in days.
pub const DEFAULT_AGENDA_DAYS: i64 = 30;

/// Calendar document file name inside the data directory.
pub const CALENDAR_FILE: &str = "calendar.json";

/// User directory file name inside the data directory.
pub const USERS_FILE: &str = "users.json";
