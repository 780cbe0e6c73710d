//! Wire envelope decoding.
//!
//! Typed senders construct [`Message`] values directly; the envelope path
//! exists for untrusted wire input, where an unrecognized type tag must be
//! reported as a protocol error rather than swallowed by serde's untagged
//! fallback.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProtocolError;
use crate::message::Message;

const KNOWN_TYPES: &[&str] = &[
    "TOGGLE_RECORDING",
    "GET_STATE",
    "SAVE_RECORDING",
    "GET_SAVED_RECORDINGS",
    "DELETE_RECORDING",
    "DOWNLOAD_RECORDING",
    "RECORD_NAVIGATE",
    "RECORD_CLICK",
    "RECORD_SCROLL",
    "RECORD_RAW_TYPE",
    "RECORD_BACKSPACE",
];

/// Raw `{type, payload?}` envelope as it arrives off the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Decode a JSON envelope into a typed message.
pub fn decode(json: &str) -> Result<Message, ProtocolError> {
    let envelope: WireEnvelope =
        serde_json::from_str(json).map_err(|err| ProtocolError::Malformed(err.to_string()))?;
    Message::try_from(envelope)
}

impl TryFrom<WireEnvelope> for Message {
    type Error = ProtocolError;

    fn try_from(envelope: WireEnvelope) -> Result<Self, Self::Error> {
        if !KNOWN_TYPES.contains(&envelope.kind.as_str()) {
            return Err(ProtocolError::UnknownType(envelope.kind));
        }
        let value = serde_json::to_value(&envelope)
            .map_err(|err| ProtocolError::Malformed(err.to_string()))?;
        serde_json::from_value(value).map_err(|err| ProtocolError::Malformed(err.to_string()))
    }
}
