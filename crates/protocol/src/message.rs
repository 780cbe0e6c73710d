//! Message classes and sender identity.

use flowrec_core_types::{RecordingId, TabId};
use serde::{Deserialize, Serialize};

use crate::payload::{
    BackspacePayload, ClickPayload, KeystrokePayload, NavigatePayload, ScrollPayload,
};

/// Commands and queries directed at the authority. Accepted regardless of
/// recording state or origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ControlMessage {
    #[serde(rename = "TOGGLE_RECORDING")]
    ToggleRecording,
    #[serde(rename = "GET_STATE")]
    GetState,
    #[serde(rename = "SAVE_RECORDING")]
    SaveRecording { name: String },
    #[serde(rename = "GET_SAVED_RECORDINGS")]
    ListSaved,
    #[serde(rename = "DELETE_RECORDING")]
    DeleteRecording { id: RecordingId },
    #[serde(rename = "DOWNLOAD_RECORDING")]
    DownloadRecording { id: RecordingId },
}

/// Facts reported by a capture agent. Accepted only while recording and
/// only from the scope tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CaptureMessage {
    #[serde(rename = "RECORD_NAVIGATE")]
    Navigate(NavigatePayload),
    #[serde(rename = "RECORD_CLICK")]
    Click(ClickPayload),
    #[serde(rename = "RECORD_SCROLL")]
    Scroll(ScrollPayload),
    #[serde(rename = "RECORD_RAW_TYPE")]
    Keystroke(KeystrokePayload),
    #[serde(rename = "RECORD_BACKSPACE")]
    Backspace(BackspacePayload),
}

/// Any inbound message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Control(ControlMessage),
    Capture(CaptureMessage),
}

impl Message {
    pub fn is_control(&self) -> bool {
        matches!(self, Message::Control(_))
    }
}

impl From<ControlMessage> for Message {
    fn from(message: ControlMessage) -> Self {
        Message::Control(message)
    }
}

impl From<CaptureMessage> for Message {
    fn from(message: CaptureMessage) -> Self {
        Message::Capture(message)
    }
}

/// Who sent a message. The platform stamps this on delivery; it is never
/// part of the payload, so an agent cannot spoof its tab.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Origin {
    /// A presentation surface or other out-of-page caller.
    Surface,
    /// A capture agent running inside the given tab.
    Tab(TabId),
}

impl Origin {
    pub fn tab(&self) -> Option<TabId> {
        match self {
            Origin::Tab(id) => Some(*id),
            Origin::Surface => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_messages_use_wire_names() {
        let json = serde_json::to_value(ControlMessage::SaveRecording {
            name: "Flow1".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "SAVE_RECORDING");
        assert_eq!(json["payload"]["name"], "Flow1");

        let toggle = serde_json::to_value(ControlMessage::ToggleRecording).unwrap();
        assert_eq!(toggle["type"], "TOGGLE_RECORDING");
    }

    #[test]
    fn untagged_message_separates_classes() {
        let control: Message =
            serde_json::from_value(serde_json::json!({ "type": "GET_STATE" })).unwrap();
        assert!(control.is_control());
    }
}
