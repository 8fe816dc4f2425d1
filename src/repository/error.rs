//! Store Errors

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reading or writing the persisted slot
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend in this environment (or access denied)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read stored todos: {0}")]
    Read(String),
    #[error("failed to write todos: {0}")]
    Write(String),
    /// Slot content is not a todo array
    #[error("stored todos are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),
}
