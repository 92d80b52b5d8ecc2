// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deployment diagnostics.

use axum::{extract::State, http::Method, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::{method_not_allowed, reject_head};
use crate::config::Config;
use crate::error::Result;
use crate::time_utils::format_utc_rfc3339_millis;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/test",
        get(diagnostics).fallback(method_not_allowed),
    )
}

/// Snapshot of the running deployment. Secret flags are `"true"`/`"false"`
/// strings and never carry the secret values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DiagnosticsResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub platform: String,
    #[serde(rename = "hasMongoDbUri")]
    pub has_mongodb_uri: String,
    pub has_jwt_secret: String,
}

impl DiagnosticsResponse {
    fn from_config(config: &Config) -> Self {
        Self {
            message: "API is working!".to_string(),
            status: "success".to_string(),
            timestamp: format_utc_rfc3339_millis(chrono::Utc::now()),
            environment: config.environment.as_str().to_string(),
            platform: config.platform.clone(),
            has_mongodb_uri: config.has_mongodb_uri.to_string(),
            has_jwt_secret: config.has_jwt_secret.to_string(),
        }
    }
}

async fn diagnostics(
    method: Method,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DiagnosticsResponse>> {
    reject_head(&method)?;
    tracing::debug!("Diagnostics requested");
    Ok(Json(DiagnosticsResponse::from_config(&state.config)))
}
