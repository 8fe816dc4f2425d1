//! Slot Codec
//!
//! JSON array of todos, no version tag.

use crate::domain::Todo;
use super::error::{StoreError, StoreResult};

pub fn encode(todos: &[Todo]) -> StoreResult<String> {
    serde_json::to_string(todos).map_err(StoreError::Encode)
}

pub fn decode(raw: &str) -> StoreResult<Vec<Todo>> {
    serde_json::from_str(raw).map_err(StoreError::Malformed)
}
