//! The tagged action record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinates, ElementRect, MaxScroll, Viewport};
use crate::wait::WaitConditions;

/// One semantic unit of user interaction, tagged by kind.
///
/// Records are immutable once emitted. Adding a kind is a compile-time
/// checked change: serialization, rendering and coalescing all match
/// exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    Navigate {
        url: String,
        wait: WaitConditions,
        viewport: Viewport,
        delay_ms: u64,
        details: String,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        timestamp: DateTime<Utc>,
    },
    Click {
        selector: String,
        fallback_selectors: Vec<String>,
        wait: WaitConditions,
        coordinates: Coordinates,
        element_rect: ElementRect,
        viewport: Viewport,
        delay_ms: u64,
        details: String,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        timestamp: DateTime<Utc>,
    },
    /// Only ever constructed by the typing coalescer.
    Type {
        selector: String,
        value: String,
        details: String,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        timestamp: DateTime<Utc>,
    },
    Scroll {
        scroll_x: i32,
        scroll_y: i32,
        wait: WaitConditions,
        viewport: Viewport,
        max_scroll: MaxScroll,
        delay_ms: u64,
        details: String,
        #[serde(with = "chrono::serde::ts_milliseconds")]
        timestamp: DateTime<Utc>,
    },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "Navigate",
            Action::Click { .. } => "Click",
            Action::Type { .. } => "Type",
            Action::Scroll { .. } => "Scroll",
        }
    }

    /// Glyph name used by presentation surfaces.
    pub fn icon(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::Click { .. } => "click",
            Action::Type { .. } => "keyboard",
            Action::Scroll { .. } => "scroll",
        }
    }

    pub fn details(&self) -> &str {
        match self {
            Action::Navigate { details, .. }
            | Action::Click { details, .. }
            | Action::Type { details, .. }
            | Action::Scroll { details, .. } => details,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Action::Navigate { timestamp, .. }
            | Action::Click { timestamp, .. }
            | Action::Type { timestamp, .. }
            | Action::Scroll { timestamp, .. } => *timestamp,
        }
    }

    /// Primary selector, when the kind targets an element.
    pub fn selector(&self) -> Option<&str> {
        match self {
            Action::Click { selector, .. } | Action::Type { selector, .. } => Some(selector),
            Action::Navigate { .. } | Action::Scroll { .. } => None,
        }
    }
}
