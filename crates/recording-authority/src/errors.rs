use flowrec_core_types::{RecordingId, TabId};
use flowrec_protocol::ProtocolError;
use storage_adapter::StorageError;
use thiserror::Error;

/// Typed refusals and failures reported back to the immediate caller.
///
/// None of these may leave the session or the typing buffer in a partial
/// state: validation happens before any mutation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthorityError {
    /// Capture message received while no recording is active.
    #[error("not recording")]
    NotRecording,

    /// Capture message from outside the scope tab.
    #[error("capture from {got} rejected; recording is scoped to {want}")]
    WrongTab { got: String, want: TabId },

    #[error("recording {0} not found")]
    NotFound(RecordingId),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("export failure: {0}")]
    Export(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The authority loop is gone; only seen during shutdown.
    #[error("authority unavailable")]
    Unavailable,
}

impl From<StorageError> for AuthorityError {
    fn from(err: StorageError) -> Self {
        AuthorityError::Storage(err.to_string())
    }
}
