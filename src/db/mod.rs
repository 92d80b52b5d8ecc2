// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! Handlers only see the [`UserStore`] and [`EventStore`] traits, so the
//! backing (flat file, memory, a real database) can change without touching
//! the routes.

pub mod events;
pub mod users;

pub use events::MemoryEventStore;
pub use users::{FileUserStore, MemoryUserStore};

use crate::models::{EventRecord, NewEvent, NewUser, UserRecord};

/// Outcome of an atomic check-and-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insert {
    Created(UserRecord),
    /// An account for the same `(email, role)` already exists
    Duplicate,
}

/// Persistent user accounts.
pub trait UserStore: Send + Sync {
    /// Every stored account, in insertion order.
    fn all(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// First account whose email and role both match exactly.
    fn find(&self, email: &str, role: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Append an account without a duplicate check.
    fn add(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Append an account unless one exists for the same `(email, role)`.
    ///
    /// The check and the insert happen under one lock.
    fn add_if_absent(&self, user: NewUser) -> Result<Insert, StoreError>;
}

/// Volunteer events.
pub trait EventStore: Send + Sync {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError>;

    /// Store a new event. The store assigns the id and the initial status.
    fn add(&self, event: NewEvent) -> Result<EventRecord, StoreError>;
}

/// Errors a store surfaces to its callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
