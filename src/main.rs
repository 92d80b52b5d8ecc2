// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volunteer Hub API Server
//!
//! Serves login, registration, and event listing for the volunteer
//! management front end.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volunteer_hub::{
    config::{Config, UserStoreKind},
    db::{FileUserStore, MemoryEventStore, MemoryUserStore, UserStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        environment = config.environment.as_str(),
        "Starting Volunteer Hub API"
    );

    let users: Arc<dyn UserStore> = match config.user_store {
        UserStoreKind::File => {
            tracing::info!(path = %config.users_file.display(), "Using file user store");
            Arc::new(FileUserStore::new(&config.users_file))
        }
        UserStoreKind::Memory => {
            tracing::info!("Using in-memory user store");
            Arc::new(MemoryUserStore::with_defaults())
        }
    };

    // Events live in memory only and reset on restart
    let events = Arc::new(MemoryEventStore::seeded());

    let state = Arc::new(AppState {
        config: config.clone(),
        users,
        events,
    });

    // Build router
    let app = volunteer_hub::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("volunteer_hub=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
