//! Persistence for the opaque session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only writer. In the browser the token lives in
//! `localStorage`; during SSR and in tests an in-memory slot stands in so the
//! store logic is identical in both environments.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "smart_meal_finder_session";

/// Failure to read or write persisted session data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("token storage unavailable")]
    Unavailable,
    #[error("token storage {0} failed")]
    Operation(&'static str),
}

/// Read/write access to the persisted session token.
pub trait TokenStore {
    /// Return the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local token slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `token` already persisted.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.lock() = Some(token.to_owned());
        store
    }

    /// Current slot contents.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.lock() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.lock() = None;
        Ok(())
    }
}

/// `window.localStorage`-backed token store.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
impl BrowserTokenStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let storage = Self::storage()?;
        let token = storage
            .get_item(TOKEN_KEY)
            .map_err(|_| StorageError::Operation("read"))?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| StorageError::Operation("write"))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| StorageError::Operation("remove"))
    }
}

/// Token store for the current environment: `localStorage` in the browser,
/// an empty in-memory slot during SSR.
#[must_use]
pub fn default_token_store() -> Arc<dyn TokenStore + Send + Sync> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserTokenStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokenStore::new())
    }
}
