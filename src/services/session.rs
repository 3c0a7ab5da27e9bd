// src/services/session.rs
//
// In-memory session state: the active user plus an open key/value bag.
//
// One explicit value owned by the embedding application (see AppState),
// not a process-wide static. Single-slot on purpose: the surrounding
// app is single-user and single-window; multi-session support would
// need a token-keyed store instead.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::User;
use crate::error::AppResult;

#[derive(Debug, Default)]
pub struct Session {
    active: Option<User>,
    data: HashMap<String, Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the user the active one, replacing any previous login.
    pub fn login(&mut self, user: User) {
        self.active = Some(user);
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    /// Clear the active user and wipe the whole key/value bag.
    pub fn logout(&mut self) {
        self.active = None;
        self.data.clear();
    }

    pub fn active(&self) -> Option<&User> {
        self.active.as_ref()
    }

    /// Stash an arbitrary value under a key, replacing any previous one.
    pub fn set_object(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    pub fn get_object(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Typed convenience over `set_object`.
    pub fn set_value<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.data.insert(key.into(), value);
        Ok(())
    }

    /// Typed convenience over `get_object`.
    pub fn get_value<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.data.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}
