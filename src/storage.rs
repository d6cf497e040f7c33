//! Storage Adapter
//!
//! Reads and writes the card list as one JSON array under a fixed key.
//! The key-value backend is `window.localStorage` in the browser and an
//! in-process map in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{js_error_message, StorageError};
use crate::models::DocumentCard;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Access(js_error_message(&e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }
}

/// In-memory store for tests, and fallback when local storage is blocked.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Card list persisted under one key
pub struct DocumentStorage<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DocumentStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `seed` if nothing is stored yet. Returns true when it seeded.
    pub fn initialize(&self, seed: &[DocumentCard]) -> Result<bool, StorageError> {
        let existing = self.store.get_item(&self.key)?;
        if existing.is_some_and(|value| !value.is_empty()) {
            return Ok(false);
        }
        self.write_all(seed)?;
        log::info!("[STORAGE] Seeded '{}' with {} documents", self.key, seed.len());
        Ok(true)
    }

    /// Stored cards; empty when the key is absent or unreadable
    pub fn read_all(&self) -> Vec<DocumentCard> {
        match self.try_read_all() {
            Ok(cards) => cards,
            Err(e) => {
                log::warn!("[STORAGE] Treating '{}' as empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn try_read_all(&self) -> Result<Vec<DocumentCard>, StorageError> {
        match self.store.get_item(&self.key)? {
            Some(json) if !json.is_empty() => Ok(serde_json::from_str(&json)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the stored list
    pub fn write_all(&self, cards: &[DocumentCard]) -> Result<(), StorageError> {
        let json = serde_json::to_string(cards)?;
        self.store.set_item(&self.key, &json)
    }
}
