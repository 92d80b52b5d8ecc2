// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod event;
pub mod profile;
pub mod user;

pub use event::{EventLocation, EventOrganizer, EventRecord, NewEvent};
pub use profile::Profile;
pub use user::{NewUser, UserRecord};
