//! Repository Layer
//!
//! Persistence of the to-do collection in a single serialized slot.

mod traits;
mod error;
mod codec;
mod local_storage;
#[cfg(test)]
mod memory;

#[cfg(test)]
mod tests;

pub use traits::TodoStore;
pub use error::{StoreError, StoreResult};
pub use codec::{decode, encode};
pub use local_storage::LocalStorageStore;
#[cfg(test)]
pub use memory::MemoryStore;
