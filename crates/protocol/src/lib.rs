//! Inter-role message protocol.
//!
//! Every cross-role exchange uses one envelope: a type tag plus an optional
//! payload, delivered over an asynchronous channel with at most one reply.
//! Control messages are accepted by the authority unconditionally; capture
//! messages are subject to the recording scope check.

pub mod envelope;
pub mod errors;
pub mod message;
pub mod payload;
pub mod reply;

pub use envelope::{decode, WireEnvelope};
pub use errors::ProtocolError;
pub use message::{CaptureMessage, ControlMessage, Message, Origin};
pub use payload::{
    BackspacePayload, ClickPayload, KeystrokePayload, NavigatePayload, ScrollPayload,
};
pub use reply::{DownloadReceipt, Reply};
