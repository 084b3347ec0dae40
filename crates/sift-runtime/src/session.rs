#![forbid(unsafe_code)]

//! Persistent per-session key-value state.
//!
//! A [`SessionStore`] lives for the whole user session and survives every
//! rerun of the view; all other view-side values are rebuilt from scratch
//! each pass. Keys are seeded lazily through
//! [`get_or_init`](SessionStore::get_or_init) and mutated only by explicit
//! assignment, directly or from a binding callback.
//!
//! # Invariants
//!
//! 1. `get_or_init` is idempotent: once a key holds a value, further calls
//!    return that value untouched, whatever default they pass.
//! 2. `set` is an unconditional overwrite.
//! 3. A value written between two `get_or_init` calls is never clobbered by
//!    the second call.
//!
//! Access is single-threaded by construction (the driver owns the store), so
//! there is no interior locking.

use ahash::AHashMap;

use sift_core::Value;

/// Key-value state persisting across reruns for one user session.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: AHashMap<String, Value>,
}

impl SessionStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, seeding it with `default` on first access.
    ///
    /// Safe to call on every rerun: an already-initialized key keeps its
    /// current value and the default is dropped.
    pub fn get_or_init(&mut self, key: &str, default: impl Into<Value>) -> Value {
        if let Some(existing) = self.entries.get(key) {
            return existing.clone();
        }
        let value = default.into();
        tracing::debug!(key, %value, "session key initialized");
        self.entries.insert(key.to_owned(), value.clone());
        value
    }

    /// Unconditionally overwrite `key` with `value`.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_owned(), value.into());
    }

    /// The current value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether `key` has been initialized.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Number of initialized keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been initialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable JSON export of the whole store, keys sorted.
    #[must_use]
    pub fn snapshot(&self) -> serde_json::Value {
        let mut pairs: Vec<(&String, &Value)> = self.entries.iter().collect();
        pairs.sort_by_key(|(key, _)| *key);
        let mut map = serde_json::Map::new();
        for (key, value) in pairs {
            let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
            map.insert(key.clone(), json);
        }
        serde_json::Value::Object(map)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
