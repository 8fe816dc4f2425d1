//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the persisted slot.
//! Implementations can use browser localStorage, in-memory, etc.

use crate::domain::Todo;
use super::error::StoreResult;

/// Whole-collection persistence
///
/// There is no per-item access: the collection is read once and rewritten
/// in full after every change.
pub trait TodoStore {
    /// Read the collection. `Ok(None)` when nothing was ever saved.
    fn load(&self) -> StoreResult<Option<Vec<Todo>>>;

    /// Overwrite the slot with the full collection
    fn save(&self, todos: &[Todo]) -> StoreResult<()>;
}

/// Lets callers keep a handle on a store they lend to the list
impl<S: TodoStore + ?Sized> TodoStore for &S {
    fn load(&self) -> StoreResult<Option<Vec<Todo>>> {
        (**self).load()
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        (**self).save(todos)
    }
}
