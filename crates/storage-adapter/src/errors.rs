use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("storage serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Injection failures. `AlreadyInjected` is expected during a session's
/// lifetime and is swallowed by the caller; anything else is best-effort
/// and logged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InjectError {
    #[error("capture agent already present in {tab}")]
    AlreadyInjected { tab: String },

    #[error("injection failed: {0}")]
    Failed(String),
}
