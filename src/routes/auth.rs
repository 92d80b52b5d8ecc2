// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and registration against the user store.

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::{method_not_allowed, run_blocking};
use crate::db::Insert;
use crate::error::{AppError, Result};
use crate::models::user::DEFAULT_ROLE;
use crate::models::{NewUser, Profile, UserRecord};
use crate::session::{issue_token, passwords_match};
use crate::AppState;

const MISSING_FIELDS: &str = "Please enter all fields";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const ALREADY_REGISTERED: &str = "User ID already registered for this role";
const LOGIN_SUCCESS: &str = "Login successful";
const REGISTER_SUCCESS: &str = "User registered successfully. Please complete your profile.";
/// Display name given to every self-registered account.
const NEW_USER_NAME: &str = "New User";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/auth/simple-login",
            post(login).fallback(method_not_allowed),
        )
        .route(
            "/api/auth/simple-register",
            post(register).fallback(method_not_allowed),
        )
}

/// Raw login/register body. Absent, mistyped, and empty values are all
/// treated as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody {
    user_id: Option<String>,
    password: Option<String>,
    role: Option<String>,
}

#[derive(Debug)]
struct Credentials {
    user_id: String,
    password: String,
    role: String,
}

fn parse_credentials(body: &[u8]) -> Result<Credentials> {
    let raw: CredentialsBody = serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Unreadable credentials body");
        CredentialsBody::default()
    });

    let present = |value: Option<String>| value.filter(|v| !v.is_empty());

    match (present(raw.user_id), present(raw.password)) {
        (Some(user_id), Some(password)) => Ok(Credentials {
            user_id,
            password,
            role: present(raw.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }),
        _ => Err(AppError::BadRequest(MISSING_FIELDS.to_string())),
    }
}

/// Response for successful login or registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: String,
    /// The account email
    pub user_id: String,
    pub role: String,
    pub profile: Profile,
    pub token: String,
    pub message: String,
}

impl AuthResponse {
    fn for_user(user: &UserRecord, message: &str) -> Self {
        Self {
            id: user.id.clone(),
            user_id: user.email.clone(),
            role: user.role.clone(),
            profile: Profile::default(),
            token: issue_token(&user.id),
            message: message.to_string(),
        }
    }
}

/// Check credentials for `(userId, role)`.
async fn login(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<AuthResponse>> {
    let credentials = parse_credentials(&body).inspect_err(|_| {
        tracing::warn!("Login rejected: missing fields");
    })?;

    tracing::info!(
        user_id = %credentials.user_id,
        role = %credentials.role,
        "Login attempt"
    );

    let users = state.users.clone();
    let (email, role) = (credentials.user_id.clone(), credentials.role.clone());
    let user = run_blocking(move || users.find(&email, &role)).await?;

    let Some(user) = user else {
        tracing::warn!(
            user_id = %credentials.user_id,
            role = %credentials.role,
            "Login failed: no such user"
        );
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !passwords_match(&user.password, &credentials.password) {
        tracing::warn!(
            user_id = %credentials.user_id,
            role = %credentials.role,
            "Login failed: password mismatch"
        );
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!(id = %user.id, role = %user.role, "Login successful");
    Ok(Json(AuthResponse::for_user(&user, LOGIN_SUCCESS)))
}

/// Create an account for `(userId, role)` unless one exists.
async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let credentials = parse_credentials(&body).inspect_err(|_| {
        tracing::warn!("Registration rejected: missing fields");
    })?;

    tracing::info!(
        user_id = %credentials.user_id,
        role = %credentials.role,
        "Registration attempt"
    );

    let new_user = NewUser {
        email: credentials.user_id.clone(),
        password: credentials.password,
        role: credentials.role.clone(),
        name: NEW_USER_NAME.to_string(),
    };

    let users = state.users.clone();
    match run_blocking(move || users.add_if_absent(new_user)).await? {
        Insert::Created(user) => {
            tracing::info!(id = %user.id, role = %user.role, "User registered");
            Ok((
                StatusCode::CREATED,
                Json(AuthResponse::for_user(&user, REGISTER_SUCCESS)),
            ))
        }
        Insert::Duplicate => {
            tracing::warn!(
                user_id = %credentials.user_id,
                role = %credentials.role,
                "Registration rejected: already registered"
            );
            Err(AppError::BadRequest(ALREADY_REGISTERED.to_string()))
        }
    }
}
