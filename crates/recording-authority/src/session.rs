//! The canonical recording session.

use action_model::{Action, RecorderSnapshot};
use flowrec_core_types::TabId;

/// Mutable only from inside the authority loop. Everything the outside
/// world sees is a [`RecorderSnapshot`] clone.
#[derive(Clone, Debug, Default)]
pub struct RecordingSession {
    pub is_recording: bool,
    pub scope_tab: Option<TabId>,
    pub actions: Vec<Action>,
}

impl RecordingSession {
    pub fn snapshot(&self) -> RecorderSnapshot {
        RecorderSnapshot {
            is_recording: self.is_recording,
            scope_tab: self.scope_tab,
            actions: self.actions.clone(),
        }
    }

    /// Whether a capture message from `tab` falls inside the recording
    /// scope. Only meaningful while recording.
    pub fn in_scope(&self, tab: TabId) -> bool {
        self.scope_tab == Some(tab)
    }
}
