// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volunteer Hub: volunteer sign-in and event listing.
//!
//! This crate provides the JSON API (login, registration, events,
//! diagnostics) and, with the `web` feature, the browser script that drives
//! the single-page front end.

pub mod db;
pub mod frontend;
pub mod models;
pub mod session;
pub mod time_utils;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod middleware;
#[cfg(feature = "ssr")]
pub mod routes;

/// Shared application state.
#[cfg(feature = "ssr")]
pub struct AppState {
    pub config: config::Config,
    pub users: std::sync::Arc<dyn db::UserStore>,
    pub events: std::sync::Arc<dyn db::EventStore>,
}
