//! Browser session: bearer token plus a cached profile snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is an explicit object provided through Leptos context rather than
//! ambient `localStorage` calls scattered across pages. Storage itself sits
//! behind `KeyValueStore` so the browser backend (`util::storage`) and the
//! in-memory backend used on the server and in tests are interchangeable.
//!
//! There is no expiry or integrity check here. The backend rejects stale
//! tokens with a 401 and the dashboard clears the session in response.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::net::types::UserProfile;

/// Local-storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Local-storage key holding the JSON profile snapshot.
pub const PROFILE_KEY: &str = "userData";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("profile encode failed: {0}")]
    Encode(String),
}

/// String key-value storage with browser `Storage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns an error when the backend is missing or refuses the write
    /// (quota exceeded, private browsing).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Shared in-memory storage. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// A snapshot of the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub bearer_token: String,
    pub cached_profile: Option<UserProfile>,
}

/// Read / write / clear interface over the persisted session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Stored bearer token; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Cached profile snapshot. A snapshot that no longer decodes is treated
    /// as absent rather than an error.
    pub fn profile(&self) -> Option<UserProfile> {
        let raw = self.backend.get(PROFILE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn session(&self) -> Option<Session> {
        let bearer_token = self.token()?;
        Some(Session { bearer_token, cached_profile: self.profile() })
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token. A profile from the same response
    /// replaces the snapshot; without one, any snapshot left by an earlier
    /// session is dropped so it cannot be mistaken for the new user.
    ///
    /// # Errors
    ///
    /// Returns an error when the token or profile cannot be written.
    pub fn establish(&self, token: &str, profile: Option<&UserProfile>) -> Result<(), StorageError> {
        self.backend.set(TOKEN_KEY, token)?;
        match profile {
            Some(profile) => self.store_profile(profile),
            None => {
                self.backend.remove(PROFILE_KEY);
                Ok(())
            }
        }
    }

    /// Overwrite the cached profile after a refresh.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot cannot be encoded or written.
    pub fn store_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set(PROFILE_KEY, &raw)
    }

    /// Drop both the token and the profile snapshot.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(PROFILE_KEY);
    }

    /// Cached email, used to prefill checkout.
    pub fn cached_email(&self) -> Option<String> {
        self.profile().map(|p| p.email).filter(|e| !e.is_empty())
    }
}
