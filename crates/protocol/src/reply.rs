//! Reply payloads. At most one per request.

use action_model::{RecorderSnapshot, SavedRecording};
use serde::{Deserialize, Serialize};

/// Proof that a recording was rendered to a transportable artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadReceipt {
    pub filename: String,
    /// Opaque handle from the export sink (a path, a download id...).
    pub handle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reply")]
pub enum Reply {
    Ack,
    State(RecorderSnapshot),
    Recordings(Vec<SavedRecording>),
    Download(DownloadReceipt),
}

impl Reply {
    /// The snapshot, when this reply carries one.
    pub fn into_state(self) -> Option<RecorderSnapshot> {
        match self {
            Reply::State(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn into_recordings(self) -> Option<Vec<SavedRecording>> {
        match self {
            Reply::Recordings(recordings) => Some(recordings),
            _ => None,
        }
    }
}
