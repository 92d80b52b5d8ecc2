// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volunteer event model for storage and API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Status every newly created event starts in.
pub const UPCOMING: &str = "upcoming";

/// Keys the server owns; client-supplied values for them are discarded.
const SERVER_OWNED_FIELDS: [&str; 3] = ["_id", "status", "currentVolunteers"];

/// Stored event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Position-derived id ("1", "2", ...)
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category, e.g. "Community Service"
    pub event_type: String,
    pub required_skills: Vec<String>,
    pub location: EventLocation,
    /// ISO 8601 text exactly as the client sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Length in hours, possibly fractional
    pub duration: Number,
    pub max_volunteers: Number,
    pub current_volunteers: Number,
    pub status: String,
    pub organizer: EventOrganizer,
    pub requirements: Vec<String>,
    /// Additional client-supplied fields, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOrganizer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Event as submitted by a client. Every field is optional, and an explicit
/// `null` reads the same as a missing field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: EventLocation,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_zero")]
    pub duration: Number,
    #[serde(deserialize_with = "null_as_zero")]
    pub max_volunteers: Number,
    #[serde(deserialize_with = "null_as_default")]
    pub organizer: EventOrganizer,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for NewEvent {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            event_type: String::new(),
            required_skills: Vec::new(),
            location: EventLocation::default(),
            start_date: None,
            end_date: None,
            duration: zero(),
            max_volunteers: zero(),
            organizer: EventOrganizer::default(),
            requirements: Vec::new(),
            extra: Map::new(),
        }
    }
}

fn zero() -> Number {
    Number::from(0u32)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer).map(|n| n.unwrap_or_else(zero))
}

impl NewEvent {
    /// Build the stored record: assigns `id`, resets status to upcoming and
    /// the volunteer count to zero.
    pub fn into_record(mut self, id: String) -> EventRecord {
        for key in SERVER_OWNED_FIELDS {
            self.extra.remove(key);
        }

        EventRecord {
            id,
            title: self.title,
            description: self.description,
            event_type: self.event_type,
            required_skills: self.required_skills,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            duration: self.duration,
            max_volunteers: self.max_volunteers,
            current_volunteers: zero(),
            status: UPCOMING.to_string(),
            organizer: self.organizer,
            requirements: self.requirements,
            extra: self.extra,
        }
    }
}
