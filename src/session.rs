// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session tokens and password checks.
//!
//! Tokens are opaque strings of the form `simple_token_<userId>_<millis>`.
//! They carry no signature or expiry and are never verified, so anyone who
//! knows a user id can forge one. Replace with signed, expiring tokens and
//! salted password hashes before exposing real accounts.

use subtle::ConstantTimeEq;

const TOKEN_PREFIX: &str = "simple_token";

/// Issue a token for `user_id` stamped with the current time.
pub fn issue_token(user_id: &str) -> String {
    issue_token_at(user_id, chrono::Utc::now().timestamp_millis())
}

/// Issue a token for `user_id` stamped with `issued_at_millis`.
pub fn issue_token_at(user_id: &str, issued_at_millis: i64) -> String {
    format!("{TOKEN_PREFIX}_{user_id}_{issued_at_millis}")
}

/// Compare a stored password with a supplied one without early exit.
pub fn passwords_match(stored: &str, supplied: &str) -> bool {
    stored.as_bytes().ct_eq(supplied.as_bytes()).into()
}
