use thiserror::Error;

/// Errors raised by token stores.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token store IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("token store is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("token store lock poisoned")]
    Poisoned,
}
