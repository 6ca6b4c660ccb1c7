//! The event collection and its persistence.
//!
//! The whole collection is the unit of persistence: every mutation
//! re-serializes all events into the single durable key. That is cheap at
//! this scale and keeps the stored payload trivially inspectable.

use crate::db::EVENTS_KEY;
use crate::db::backend::Backend;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, EventPatch, NewEvent};
use crate::ui::messages::warning;
use chrono::NaiveDate;

pub struct EventStore<B: Backend> {
    events: Vec<CalendarEvent>,
    backend: B,
}

impl<B: Backend> EventStore<B> {
    /// Read the stored collection once. A missing key is an empty calendar;
    /// an unparseable payload is discarded with a diagnostic rather than
    /// aborting, so a damaged store never bricks the CLI.
    pub fn load(mut backend: B) -> AppResult<Self> {
        let events = match backend.read(EVENTS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(events) => events,
                Err(e) => {
                    warning(format!("Stored events are unreadable, starting empty: {}", e));
                    backend.note("load", "discarded corrupt event data")?;
                    Vec::new()
                }
            },
        };

        Ok(Self { events, backend })
    }

    /// Insertion-ordered view of the whole collection.
    pub fn all(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn find(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events on the given day, in insertion order (never time-sorted; the
    /// grid relies on this for stacking).
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Create an event with a fresh id, persist, and return it. Titles,
    /// dates and times are stored as given; nothing is validated here.
    pub fn create(&mut self, fields: NewEvent) -> AppResult<CalendarEvent> {
        let event = CalendarEvent::new(fields);
        self.events.push(event.clone());
        self.persist()?;
        Ok(event)
    }

    /// Merge a partial update into the event with `id`. Returns whether a
    /// matching event existed; an unknown id leaves the collection as-is.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> AppResult<bool> {
        let found = match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                event.apply(patch);
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(found)
    }

    /// Remove the event with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.persist()?;
        Ok(self.events.len() < before)
    }

    fn persist(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.events)?;
        self.backend.write(EVENTS_KEY, &raw)
    }
}
