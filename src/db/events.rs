// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory event store, seeded at startup and reset on every restart.

use super::{EventStore, StoreError};
use crate::models::event::UPCOMING;
use crate::models::{EventLocation, EventOrganizer, EventRecord, NewEvent};
use serde_json::{Map, Number};
use std::sync::RwLock;

/// Events held in process memory.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<EventRecord>>,
}

impl MemoryEventStore {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Store holding the three sample events.
    pub fn seeded() -> Self {
        Self::new(seed_events())
    }
}

impl EventStore for MemoryEventStore {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError> {
        let events = self.events.read().map_err(|_| StoreError::Poisoned)?;
        Ok(events.clone())
    }

    fn add(&self, event: NewEvent) -> Result<EventRecord, StoreError> {
        let mut events = self.events.write().map_err(|_| StoreError::Poisoned)?;
        let record = event.into_record((events.len() + 1).to_string());
        events.push(record.clone());
        Ok(record)
    }
}

/// Sample events present at process start.
pub fn seed_events() -> Vec<EventRecord> {
    vec![
        EventRecord {
            id: "1".to_string(),
            title: "Community Food Drive".to_string(),
            description: "Help sort and distribute food donations to families in need."
                .to_string(),
            event_type: "Community Service".to_string(),
            required_skills: vec!["Organization".to_string(), "Teamwork".to_string()],
            location: EventLocation {
                address: "123 Main Street".to_string(),
                city: "Houston".to_string(),
                state: "TX".to_string(),
                zip_code: "77001".to_string(),
            },
            start_date: Some("2025-03-15T09:00:00.000Z".to_string()),
            end_date: Some("2025-03-15T14:00:00.000Z".to_string()),
            duration: Number::from(5),
            max_volunteers: Number::from(20),
            current_volunteers: Number::from(8),
            status: UPCOMING.to_string(),
            organizer: EventOrganizer {
                name: "Houston Food Bank".to_string(),
                email: "volunteer@houstonfoodbank.org".to_string(),
                phone: "713-555-0101".to_string(),
            },
            requirements: vec!["Closed-toe shoes".to_string(), "Age 16+".to_string()],
            extra: Map::new(),
        },
        EventRecord {
            id: "2".to_string(),
            title: "Park Cleanup Day".to_string(),
            description: "Remove litter and invasive plants along the bayou trail.".to_string(),
            event_type: "Environmental".to_string(),
            required_skills: vec!["Physical Labor".to_string()],
            location: EventLocation {
                address: "4800 Memorial Drive".to_string(),
                city: "Houston".to_string(),
                state: "TX".to_string(),
                zip_code: "77007".to_string(),
            },
            start_date: Some("2025-03-22T08:00:00.000Z".to_string()),
            end_date: Some("2025-03-22T12:00:00.000Z".to_string()),
            duration: Number::from(4),
            max_volunteers: Number::from(30),
            current_volunteers: Number::from(12),
            status: UPCOMING.to_string(),
            organizer: EventOrganizer {
                name: "Bayou Parks Alliance".to_string(),
                email: "events@bayouparks.org".to_string(),
                phone: "713-555-0144".to_string(),
            },
            requirements: vec!["Gloves provided".to_string(), "Bring water".to_string()],
            extra: Map::new(),
        },
        EventRecord {
            id: "3".to_string(),
            title: "Senior Center Tech Help".to_string(),
            description: "Teach seniors to use phones, tablets, and video calls.".to_string(),
            event_type: "Education".to_string(),
            required_skills: vec!["Technology".to_string(), "Patience".to_string()],
            location: EventLocation {
                address: "2100 Fannin Street".to_string(),
                city: "Houston".to_string(),
                state: "TX".to_string(),
                zip_code: "77002".to_string(),
            },
            start_date: Some("2025-04-05T13:00:00.000Z".to_string()),
            end_date: Some("2025-04-05T16:00:00.000Z".to_string()),
            duration: Number::from(3),
            max_volunteers: Number::from(10),
            current_volunteers: Number::from(3),
            status: UPCOMING.to_string(),
            organizer: EventOrganizer {
                name: "Midtown Senior Center".to_string(),
                email: "info@midtownseniors.org".to_string(),
                phone: "713-555-0177".to_string(),
            },
            requirements: vec!["Background check".to_string()],
            extra: Map::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_three_upcoming_events() {
        let store = MemoryEventStore::seeded();
        let events = store.list().unwrap();

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.status == "upcoming"));
        assert!(events.iter().all(|e| e.start_date.is_some()));
    }

    #[test]
    fn test_add_assigns_next_position_id() {
        let store = MemoryEventStore::seeded();

        let first = store.add(NewEvent::default()).unwrap();
        let second = store.add(NewEvent::default()).unwrap();

        assert_eq!(first.id, "4");
        assert_eq!(second.id, "5");
        assert_eq!(store.list().unwrap().len(), 5);
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let store = MemoryEventStore::default();
        let event = store.add(NewEvent::default()).unwrap();
        assert_eq!(event.id, "1");
        assert_eq!(event.current_volunteers, Number::from(0));
    }
}
