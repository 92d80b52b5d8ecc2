// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volunteer event listing and creation.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::{method_not_allowed, reject_head};
use crate::error::{AppError, Result};
use crate::models::{EventRecord, NewEvent};
use crate::AppState;

const INVALID_EVENT: &str = "Invalid event payload";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/events/simple",
        get(list_events)
            .post(create_event)
            .fallback(method_not_allowed),
    )
}

/// List every event, seeds first.
async fn list_events(
    method: Method,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventRecord>>> {
    reject_head(&method)?;
    let events = state.events.list()?;
    tracing::debug!(count = events.len(), "Listing events");
    Ok(Json(events))
}

/// Parse an event body. An empty body yields an event built from defaults.
fn parse_event(body: &[u8]) -> Result<NewEvent> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewEvent::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected event payload");
        AppError::BadRequest(INVALID_EVENT.to_string())
    })
}

/// Create an event. Status and volunteer count are always reset.
async fn create_event(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<EventRecord>)> {
    let event = parse_event(&body)?;
    let record = state.events.add(event)?;

    tracing::info!(id = %record.id, title = %record.title, "Event created");
    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_empty_body() {
        assert_eq!(parse_event(b"").unwrap(), NewEvent::default());
        assert_eq!(parse_event(b"  \n").unwrap(), NewEvent::default());
    }

    #[test]
    fn test_parse_event_rejects_malformed() {
        let bodies: [&[u8]; 3] = [b"{", b"[1, 2]", br#"{"duration": "two hours"}"#];
        for body in bodies {
            assert!(matches!(
                parse_event(body),
                Err(AppError::BadRequest(msg)) if msg == INVALID_EVENT
            ));
        }
    }
}
