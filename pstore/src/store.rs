//! The preference store contract and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A simple persistent key-value mechanism scoped to the client.
///
/// A missing or unexpected value means "no preference", never an error.
/// `set` and `remove` must not fail loudly; implementations that can lose
/// writes log and carry on.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// Non-persistent store. The default for tests and for hosts that manage
/// persistence themselves.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values().remove(key);
    }
}
