// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use volunteer_hub::config::Config;
use volunteer_hub::db::{EventStore, MemoryEventStore, MemoryUserStore, UserStore};
use volunteer_hub::routes::create_router;
use volunteer_hub::AppState;

/// Create a test app backed by in-memory stores.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(
        Config::test_default(),
        Arc::new(MemoryUserStore::with_defaults()),
        Arc::new(MemoryEventStore::seeded()),
    )
}

/// Create a test app with explicit config and stores.
#[allow(dead_code)]
pub fn create_test_app_with(
    config: Config,
    users: Arc<dyn UserStore>,
    events: Arc<dyn EventStore>,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        users,
        events,
    });

    (create_router(state.clone()), state)
}

/// Response pieces the tests inspect.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

/// Send one request through a clone of the router.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
