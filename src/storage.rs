//! Persistence adapter over the host's string-keyed store.
//!
//! The store itself (browser local storage or anything else that can hold
//! strings under string keys) stays outside this crate behind the
//! [`KeyValueStore`] trait. Malformed persisted data is never surfaced to
//! callers: it degrades to empty/absent and is logged.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::types::{SessionRecord, Ticket, User};

/// Key holding the global user list.
pub const USERS_KEY: &str = "ticflowUsers";

/// Key holding the persisted session mirror.
pub const SESSION_KEY: &str = "ticflowCurrentUser";

/// Prefix for per-user ticket collections.
pub const TICKETS_KEY_PREFIX: &str = "ticflowTickets_";

/// Storage key for one user's ticket collection.
pub fn tickets_key(user_name: &str) -> String {
    format!("{TICKETS_KEY_PREFIX}{user_name}")
}

/// The opaque external string-keyed store.
///
/// Each call is synchronous and atomic; there is exactly one mutator at any
/// time, so no locking is needed at this seam.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`] for tests and hosts without a real store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Reads and writes the ticflow records under their deterministic keys.
#[derive(Debug, Clone, Default)]
pub struct StorageAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the global user list. Absent or malformed data yields an empty list.
    pub fn load_users(&self) -> Vec<User> {
        self.read_json(USERS_KEY).unwrap_or_default()
    }

    /// Overwrite the global user list.
    pub fn save_users(&mut self, users: &[User]) {
        self.write_json(USERS_KEY, &users);
    }

    /// Load one user's ticket collection, `None` when absent or malformed.
    pub fn load_tickets(&self, user_name: &str) -> Option<Vec<Ticket>> {
        self.read_json(&tickets_key(user_name))
    }

    /// Overwrite one user's ticket collection.
    pub fn save_tickets(&mut self, user_name: &str, tickets: &[Ticket]) {
        self.write_json(&tickets_key(user_name), &tickets);
    }

    pub fn load_session(&self) -> Option<SessionRecord> {
        self.read_json(SESSION_KEY)
    }

    pub fn save_session(&mut self, record: &SessionRecord) {
        self.write_json(SESSION_KEY, record);
    }

    pub fn clear_session(&mut self) {
        self.store.remove(SESSION_KEY);
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("malformed data under '{key}', treating as absent: {e}");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, json),
            Err(e) => tracing::warn!("failed to serialize value for '{key}': {e}"),
        }
    }
}
