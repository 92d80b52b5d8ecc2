// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::db::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message sent with every 500 response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Raw error text, only filled in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Raw text of a server error, attached to 500 responses as an extension.
///
/// `middleware::errors::expose_error_details` moves it into the body when
/// running in development.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                return server_error(err.to_string());
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                return server_error(err.to_string());
            }
        };

        let body = ErrorResponse {
            message,
            error: None,
        };

        (status, Json(body)).into_response()
    }
}

fn server_error(detail: String) -> Response {
    let body = ErrorResponse {
        message: SERVER_ERROR_MESSAGE.to_string(),
        error: None,
    };
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    response.extensions_mut().insert(ErrorDetail(detail));
    response
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
