// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Development-only exposure of server error text.

use crate::error::{ErrorDetail, ErrorResponse, SERVER_ERROR_MESSAGE};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// In development, rewrite 500 bodies to include the raw error text.
///
/// Other environments get the generic message only.
pub async fn expose_error_details(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    if !state.config.is_development() {
        return response;
    }

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    let body = Json(ErrorResponse {
        message: SERVER_ERROR_MESSAGE.to_string(),
        error: Some(detail),
    })
    .into_response()
    .into_body();

    Response::from_parts(parts, body)
}
