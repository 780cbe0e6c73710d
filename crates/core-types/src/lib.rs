use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Shared error type for the recorder kernel crates.
#[derive(Debug, Error, Clone)]
pub enum RecError {
    #[error("{message}")]
    Message { message: String },
}

impl RecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Handle identifying a single browser tab.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Identifier for a persisted recording.
///
/// Ids sort by creation because the millisecond timestamp leads; the uuid
/// suffix rules out collisions between saves landing in the same millisecond.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RecordingId(pub String);

impl RecordingId {
    pub fn generate(created_at: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "rec_{}_{}",
            created_at.timestamp_millis(),
            &suffix[..8]
        ))
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL schemes that never accept a capture agent.
const PRIVILEGED_SCHEMES: &[&str] = &[
    "chrome://",
    "chrome-extension://",
    "edge://",
    "about:",
    "devtools://",
];

/// Identity and location of a browser tab as reported by the tab registry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub url: String,
}

impl TabInfo {
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }

    /// Whether a capture agent may be installed into this tab.
    pub fn is_capturable(&self) -> bool {
        !PRIVILEGED_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Host portion of the tab URL, used for human-facing descriptions.
    pub fn host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        rest.split(['/', '?', '#']).next().unwrap_or(rest)
    }
}
