//! Browser localStorage Store
//!
//! Keeps the collection under one key. The `Storage` handle is looked up on
//! each call so the store itself stays `Send + Sync` and can live in a signal.

use crate::domain::Todo;
use super::codec::{decode, encode};
use super::error::{StoreError, StoreResult};
use super::traits::TodoStore;

/// localStorage-backed store
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TodoStore for LocalStorageStore {
    fn load(&self) -> StoreResult<Option<Vec<Todo>>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))?;
        raw.map(|raw| decode(&raw)).transpose()
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        let raw = encode(todos)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
