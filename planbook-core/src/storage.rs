//! File persistence for the calendar document and the user directory.

use std::fs;
use std::path::Path;

use crate::auth::UserDirectory;
use crate::calendar::Calendar;
use crate::error::{Error, Result};
use crate::json;

/// Load a calendar from a document file.
///
/// A missing file is [`Error::NotFound`]; the caller decides whether that
/// means "start a fresh calendar". The store is rebuilt through
/// conflict-checked inserts, so a document violating the no-conflict
/// invariant fails to load as a whole.
pub fn load_calendar(path: &Path) -> Result<Calendar> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let document = fs::read_to_string(path)?;
    let events = json::deserialize_events(&document)?;
    Calendar::from_events(events)
}

/// Write the full calendar document, creating parent directories as needed.
pub fn save_calendar(path: &Path, calendar: &Calendar) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let document = json::serialize_events(&calendar.events())?;
    fs::write(path, document)?;
    Ok(())
}

/// Load the user directory; a missing file is an empty directory.
pub fn load_users(path: &Path) -> Result<UserDirectory> {
    if !path.exists() {
        return Ok(UserDirectory::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::Decode(e.to_string()))
}

pub fn save_users(path: &Path, users: &UserDirectory) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content =
        serde_json::to_string_pretty(users).map_err(|e| Error::Serialization(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PasswordEncoder, SaltedSha256};
    use crate::event::{Event, EventKind};
    use crate::fields::{EventDuration, Owner, Title};
    use chrono::NaiveDate;

    fn sample_event(owner: &str, hour: u32) -> Event {
        Event::new(
            Title::new("Dentist").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 17)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            EventDuration::minutes(30).unwrap(),
            Owner::new(owner).unwrap(),
            EventKind::Appointment,
        )
    }

    #[test]
    fn calendar_survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");

        let mut calendar = Calendar::new();
        calendar.add(sample_event("alice", 10)).unwrap();
        calendar.add(sample_event("alice", 14)).unwrap();
        save_calendar(&path, &calendar).unwrap();

        let loaded = load_calendar(&path).unwrap();
        assert_eq!(loaded.events(), calendar.events());
    }

    #[test]
    fn loading_a_missing_calendar_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match load_calendar(&path) {
            Err(Error::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn loading_a_corrupt_calendar_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        fs::write(&path, "{definitely not a document").unwrap();

        assert!(matches!(load_calendar(&path), Err(Error::Decode(_))));
    }

    #[test]
    fn loading_a_conflicting_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");

        // Two same-owner events at the same time, written without going
        // through the conflict-checked store.
        let events = vec![sample_event("alice", 10), sample_event("alice", 10)];
        let document = json::serialize_events(&events).unwrap();
        fs::write(&path, document).unwrap();

        assert!(matches!(load_calendar(&path), Err(Error::Conflict { .. })));
    }

    #[test]
    fn user_directory_survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let mut users = UserDirectory::default();
        users.register("michel", "s3cret", &SaltedSha256).unwrap();
        save_users(&path, &users).unwrap();

        let loaded = load_users(&path).unwrap();
        let user = loaded.find("michel").unwrap();
        assert!(SaltedSha256.matches("s3cret", &user.hashed_password));
    }

    #[test]
    fn missing_user_file_is_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_users(&dir.path().join("users.json")).unwrap();
        assert!(loaded.is_empty());
    }
}
