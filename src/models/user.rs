// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account model for storage.

use serde::{Deserialize, Serialize};

/// Role assumed when a request does not name one.
pub const DEFAULT_ROLE: &str = "volunteer";

/// User account as persisted in the user store.
///
/// The password is stored in plaintext. This is a known gap: accounts need
/// salted hashes before this store holds real credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Epoch-millisecond timestamp at creation, as a string
    pub id: String,
    /// Login identifier (the `userId` of auth requests)
    pub email: String,
    pub password: String,
    /// "volunteer" or "admin"
    pub role: String,
    /// Display name
    pub name: String,
}

/// Fields supplied by a caller creating a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: String,
}

impl NewUser {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: String) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            password: self.password,
            role: self.role,
            name: self.name,
        }
    }
}

impl UserRecord {
    /// True when this record is the account for `(email, role)`.
    ///
    /// Matching is exact and case-sensitive on both fields.
    pub fn matches(&self, email: &str, role: &str) -> bool {
        self.email == email && self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_sensitive() {
        let user = NewUser {
            email: "Ana@example.com".to_string(),
            password: "pw".to_string(),
            role: "volunteer".to_string(),
            name: "Ana".to_string(),
        }
        .with_id("1".to_string());

        assert!(user.matches("Ana@example.com", "volunteer"));
        assert!(!user.matches("ana@example.com", "volunteer"));
        assert!(!user.matches("Ana@example.com", "admin"));
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{"id":"7","email":"a@b.c","password":"x","role":"admin","name":"A"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.role, "admin");
        assert_eq!(serde_json::to_string(&user).unwrap(), json);
    }
}
