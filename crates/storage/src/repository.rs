use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use quiz_core::model::QuestionBank;
use thiserror::Error;

use crate::bank::QuestionSource;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("key not found: {key}")]
    NotFound { key: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Session-scoped string key/value storage.
///
/// Lives for one application session; nothing is written to disk.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Fetch the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Fetch a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the key is absent.
    fn require_item(&self, key: &str) -> Result<String, StorageError> {
        self.get_item(key)?.ok_or_else(|| StorageError::NotFound {
            key: key.to_owned(),
        })
    }
}

/// In-memory session store, shared across clones.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

/// Aggregates the question source and session store behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
    pub session: Arc<dyn SessionStore>,
}

impl Storage {
    /// Serve `bank` with a fresh in-memory session store.
    #[must_use]
    pub fn in_memory(bank: QuestionBank) -> Self {
        let questions: Arc<dyn QuestionSource> = Arc::new(bank);
        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        Self { questions, session }
    }
}
