//! The event store: owns the persisted events and enforces the per-owner
//! no-conflict invariant on insert.

use crate::conflict::in_conflict;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::expand::occurrences;
use crate::fields::EventId;
use crate::time_range::TimeRange;

#[derive(Debug, Default, Clone)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Calendar { events: Vec::new() }
    }

    /// Rebuild a calendar from decoded events, conflict-checking each one.
    pub fn from_events(events: Vec<Event>) -> Result<Self> {
        let mut calendar = Calendar::new();
        for event in events {
            calendar.add(event)?;
        }
        Ok(calendar)
    }

    /// Store an event.
    ///
    /// Fails with [`Error::Conflict`] carrying the rejected event and every
    /// conflicting stored event; the store is left unchanged in that case.
    pub fn add(&mut self, event: Event) -> Result<()> {
        let conflicting: Vec<Event> = self
            .events
            .iter()
            .filter(|stored| in_conflict(&event, stored))
            .cloned()
            .collect();

        if !conflicting.is_empty() {
            return Err(Error::Conflict {
                event: Box::new(event),
                conflicting,
            });
        }

        self.events.push(event);
        Ok(())
    }

    /// Remove the event with this id. Returns whether one was found.
    pub fn remove(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != *id);
        self.events.len() < before
    }

    pub fn find_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == *id)
    }

    /// All occurrences of all stored events inside `window`, sorted by start
    /// instant (stable, so equal starts keep store order).
    pub fn occurrences_in_range(&self, window: &TimeRange) -> Vec<Event> {
        let mut found: Vec<Event> = self
            .events
            .iter()
            .flat_map(|event| occurrences(event, window))
            .collect();
        found.sort_by_key(|occurrence| occurrence.start);
        found
    }

    /// A copy of the stored events; mutating it does not touch the store.
    pub fn events(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
