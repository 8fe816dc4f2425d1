//! In-Memory Store
//!
//! Holds the serialized slot in a `RefCell`, so it goes through the same
//! codec as localStorage. Used by tests.

use std::cell::{Cell, RefCell};

use crate::domain::Todo;
use super::codec::{decode, encode};
use super::error::StoreResult;
use super::traits::TodoStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose slot already holds `raw`
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
            writes: Cell::new(0),
        }
    }

    /// Current slot contents
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of saves performed
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl TodoStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Todo>>> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        let raw = encode(todos)?;
        *self.slot.borrow_mut() = Some(raw);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
