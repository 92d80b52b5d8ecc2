// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User stores: a JSON file on disk, and an in-memory variant.
//!
//! The file store never fails outward. Read errors fall back to the default
//! accounts and write errors are logged, so callers cannot tell an empty
//! store from one that failed to load.

use super::{Insert, StoreError, UserStore};
use crate::models::{NewUser, UserRecord};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Accounts served when the backing file does not exist yet.
pub fn default_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            role: "admin".to_string(),
            name: "Admin User".to_string(),
        },
        UserRecord {
            id: "2".to_string(),
            email: "volunteer@example.com".to_string(),
            password: "volunteer123".to_string(),
            role: "volunteer".to_string(),
            name: "Volunteer User".to_string(),
        },
    ]
}

/// Next account id: the current epoch millisecond, bumped past any larger
/// numeric id already present. An id that cannot be bumped is ignored.
fn next_user_id(users: &[UserRecord]) -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let newest = users.iter().filter_map(|u| u.id.parse::<i64>().ok()).max();

    match newest {
        Some(id) if id >= now => id.checked_add(1).unwrap_or(now).to_string(),
        _ => now.to_string(),
    }
}

/// User accounts stored as one JSON array in a file.
///
/// Every operation holds a process-local lock, and writes replace the file
/// through a rename. Separate processes sharing the file are not coordinated.
#[derive(Debug)]
pub struct FileUserStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // The lock guards the file, not memory, so a poisoned lock is still usable.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read all accounts, falling back to [`default_users`] on any failure.
    ///
    /// The defaults are not written back.
    pub fn load_users(&self) -> Vec<UserRecord> {
        let _guard = self.guard();
        self.read_file()
    }

    /// Replace the file with `users`. Returns false (after logging) on failure.
    pub fn save_users(&self, users: &[UserRecord]) -> bool {
        let _guard = self.guard();
        self.write_file(users)
    }

    pub fn find_user(&self, email: &str, role: &str) -> Option<UserRecord> {
        self.load_users()
            .into_iter()
            .find(|user| user.matches(email, role))
    }

    /// Append an account and persist the list.
    ///
    /// The new record is returned even if persisting it failed.
    pub fn add_user(&self, user: NewUser) -> UserRecord {
        let _guard = self.guard();
        let mut users = self.read_file();
        let record = user.with_id(next_user_id(&users));
        users.push(record.clone());

        if !self.write_file(&users) {
            tracing::warn!(user_id = %record.id, "User added but not persisted");
        }
        record
    }

    fn read_file(&self) -> Vec<UserRecord> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Users file not found, using default accounts");
                return default_users();
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to read users file");
                return default_users();
            }
        };

        match serde_json::from_str(&data) {
            Ok(users) => users,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to parse users file");
                default_users()
            }
        }
    }

    fn write_file(&self, users: &[UserRecord]) -> bool {
        match self.try_write_file(users) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = users.len(), "Users saved");
                true
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to save users");
                false
            }
        }
    }

    fn try_write_file(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(users)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl UserStore for FileUserStore {
    fn all(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.load_users())
    }

    fn find(&self, email: &str, role: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.find_user(email, role))
    }

    fn add(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        Ok(self.add_user(user))
    }

    fn add_if_absent(&self, user: NewUser) -> Result<Insert, StoreError> {
        let _guard = self.guard();
        let mut users = self.read_file();

        if users.iter().any(|u| u.matches(&user.email, &user.role)) {
            return Ok(Insert::Duplicate);
        }

        let record = user.with_id(next_user_id(&users));
        users.push(record.clone());

        if !self.write_file(&users) {
            tracing::warn!(user_id = %record.id, "User added but not persisted");
        }
        Ok(Insert::Created(record))
    }
}

/// User accounts held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Store pre-populated with [`default_users`].
    pub fn with_defaults() -> Self {
        Self::new(default_users())
    }

    fn users(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, StoreError> {
        self.users.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl UserStore for MemoryUserStore {
    fn all(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users()?.clone())
    }

    fn find(&self, email: &str, role: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .users()?
            .iter()
            .find(|user| user.matches(email, role))
            .cloned())
    }

    fn add(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users()?;
        let record = user.with_id(next_user_id(&users));
        users.push(record.clone());
        Ok(record)
    }

    fn add_if_absent(&self, user: NewUser) -> Result<Insert, StoreError> {
        let mut users = self.users()?;
        if users.iter().any(|u| u.matches(&user.email, &user.role)) {
            return Ok(Insert::Duplicate);
        }

        let record = user.with_id(next_user_id(&users));
        users.push(record.clone());
        Ok(Insert::Created(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, role: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "secret".to_string(),
            role: role.to_string(),
            name: "New User".to_string(),
        }
    }

    fn temp_store() -> (tempfile::TempDir, FileUserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileUserStore::new(dir.path().join("users.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_returns_defaults_without_writing() {
        let (_dir, store) = temp_store();

        let users = store.load_users();

        assert_eq!(users, default_users());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_returns_defaults() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load_users(), default_users());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();
        let users = vec![new_user("a@example.com", "admin").with_id("42".to_string())];

        assert!(store.save_users(&users));
        assert_eq!(store.load_users(), users);
    }

    #[test]
    fn test_save_failure_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("users.json");
        fs::create_dir(&path).unwrap();
        let store = FileUserStore::new(&path);

        assert!(!store.save_users(&default_users()));
    }

    #[test]
    fn test_add_user_persists_defaults_and_new_record() {
        let (_dir, store) = temp_store();

        let record = store.add_user(new_user("ana@example.com", "volunteer"));

        let users = store.load_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[2], record);
        assert!(record.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_find_user_requires_both_fields() {
        let (_dir, store) = temp_store();

        assert!(store.find_user("admin@example.com", "admin").is_some());
        assert!(store.find_user("admin@example.com", "volunteer").is_none());
        assert!(store.find_user("ADMIN@example.com", "admin").is_none());
    }

    #[test]
    fn test_add_if_absent_rejects_duplicate() {
        let (_dir, store) = temp_store();

        let first = store.add_if_absent(new_user("ana@example.com", "volunteer")).unwrap();
        let second = store.add_if_absent(new_user("ana@example.com", "volunteer")).unwrap();
        let other_role = store.add_if_absent(new_user("ana@example.com", "admin")).unwrap();

        assert!(matches!(first, Insert::Created(_)));
        assert_eq!(second, Insert::Duplicate);
        assert!(matches!(other_role, Insert::Created(_)));
        assert_eq!(store.load_users().len(), 4);
    }

    #[test]
    fn test_concurrent_registrations_insert_once() {
        let (_dir, store) = temp_store();
        let store = std::sync::Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .add_if_absent(new_user("race@example.com", "volunteer"))
                        .unwrap()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| matches!(outcome, Insert::Created(_)))
            .count();

        assert_eq!(created, 1);
        assert_eq!(store.load_users().len(), 3);
    }

    #[test]
    fn test_ids_are_unique_within_one_millisecond() {
        let store = MemoryUserStore::default();

        let a = store.add(new_user("a@example.com", "volunteer")).unwrap();
        let b = store.add(new_user("b@example.com", "volunteer")).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_memory_add_skips_duplicate_check() {
        let store = MemoryUserStore::with_defaults();

        store.add(new_user("admin@example.com", "admin")).unwrap();

        assert_eq!(store.all().unwrap().len(), 3);
        assert_eq!(
            store.find("admin@example.com", "admin").unwrap().unwrap().id,
            "1"
        );
    }

    #[test]
    fn test_largest_possible_id_does_not_overflow() {
        let top = new_user("top@example.com", "admin").with_id(i64::MAX.to_string());
        let store = MemoryUserStore::new(vec![top]);

        let added = store.add(new_user("next@example.com", "volunteer")).unwrap();

        assert_ne!(added.id, i64::MAX.to_string());
        assert!(added.id.parse::<i64>().is_ok());
        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn test_file_store_registers_past_largest_id() {
        let (_dir, store) = temp_store();
        let top = new_user("top@example.com", "admin").with_id(i64::MAX.to_string());
        assert!(store.save_users(&[top]));

        let outcome = store.add_if_absent(new_user("next@example.com", "volunteer")).unwrap();

        assert!(matches!(outcome, Insert::Created(_)));
        assert_eq!(store.load_users().len(), 2);
    }
}
