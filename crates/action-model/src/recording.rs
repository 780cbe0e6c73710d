//! Persisted recordings and the read-only session snapshot.

use chrono::{DateTime, Utc};
use flowrec_core_types::{RecordingId, TabId};
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// A named, persisted action log. Immutable after save except for deletion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedRecording {
    pub id: RecordingId,
    pub name: String,
    pub actions: Vec<Action>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl SavedRecording {
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        let created_at = Utc::now();
        Self {
            id: RecordingId::generate(created_at),
            name: name.into(),
            actions,
            created_at,
        }
    }

    /// Download filename: sanitized name plus id. Non-alphanumeric name
    /// characters become underscores so the artifact is portable.
    pub fn export_filename(&self) -> String {
        let sanitized: String = self
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}_{}.json", sanitized, self.id)
    }
}

/// Read-only view of the live recording session, broadcast to presentation
/// surfaces on every change. Never authoritative.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecorderSnapshot {
    pub is_recording: bool,
    pub scope_tab: Option<TabId>,
    pub actions: Vec<Action>,
}

impl RecorderSnapshot {
    /// Whether a surface should offer the save command: there must be
    /// something to save and the session must be stopped.
    pub fn can_save(&self) -> bool {
        !self.actions.is_empty() && !self.is_recording
    }
}
