//! Key-value stash shared with the page layer.
//!
//! The form stashes a selected example under two transient keys and a
//! dark-mode flag under a third. Storage may be disabled or full, so
//! every helper that touches it degrades instead of failing the form.

use std::collections::HashMap;

use thiserror::Error;

use crate::examples::Example;

/// Stashed objective text for the next page load
pub const EXAMPLE_OBJECTIVE_KEY: &str = "example_objective";
/// Stashed constraints text for the next page load
pub const EXAMPLE_CONSTRAINTS_KEY: &str = "example_constraints";
/// Dark-mode flag, stored as `"true"` / `"false"`
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage is full")]
    Full,
}

/// String key-value persistence, the shape of browser local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for native callers and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stash an example under the two transient keys
pub fn stash_example(store: &mut impl KeyValueStore, example: &Example) -> Result<(), StoreError> {
    store.set(EXAMPLE_OBJECTIVE_KEY, example.objective)?;
    store.set(EXAMPLE_CONSTRAINTS_KEY, example.constraints)
}

/// Take a previously stashed example, clearing both keys. Returns
/// `None` unless both keys are present; store errors read as absent.
pub fn take_stashed_example(store: &mut impl KeyValueStore) -> Option<(String, String)> {
    let objective = store.get(EXAMPLE_OBJECTIVE_KEY).ok().flatten()?;
    let constraints = store.get(EXAMPLE_CONSTRAINTS_KEY).ok().flatten()?;
    let _ = store.remove(EXAMPLE_OBJECTIVE_KEY);
    let _ = store.remove(EXAMPLE_CONSTRAINTS_KEY);
    Some((objective, constraints))
}

/// True iff the stored flag is exactly `"true"`; absence and store
/// errors read as light mode.
pub fn dark_mode_enabled(store: &impl KeyValueStore) -> bool {
    matches!(store.get(DARK_MODE_KEY), Ok(Some(v)) if v == "true")
}

pub fn set_dark_mode(store: &mut impl KeyValueStore, enabled: bool) -> Result<(), StoreError> {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
}
