//! Capture message payloads.
//!
//! Each payload carries everything the authority needs to mint the
//! corresponding action without consulting the page again. Keystroke and
//! backspace payloads are raw facts: the coalescer, not the agent, decides
//! when they become a Type action.

use action_model::{Action, Coordinates, ElementRect, MaxScroll, Viewport, WaitConditions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatePayload {
    pub url: String,
    pub wait: WaitConditions,
    pub viewport: Viewport,
    pub delay_ms: u64,
    pub details: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl From<NavigatePayload> for Action {
    fn from(payload: NavigatePayload) -> Self {
        Action::Navigate {
            url: payload.url,
            wait: payload.wait,
            viewport: payload.viewport,
            delay_ms: payload.delay_ms,
            details: payload.details,
            timestamp: payload.timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickPayload {
    pub selector: String,
    pub fallback_selectors: Vec<String>,
    pub wait: WaitConditions,
    pub coordinates: Coordinates,
    pub element_rect: ElementRect,
    pub viewport: Viewport,
    pub delay_ms: u64,
    pub details: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl From<ClickPayload> for Action {
    fn from(payload: ClickPayload) -> Self {
        Action::Click {
            selector: payload.selector,
            fallback_selectors: payload.fallback_selectors,
            wait: payload.wait,
            coordinates: payload.coordinates,
            element_rect: payload.element_rect,
            viewport: payload.viewport,
            delay_ms: payload.delay_ms,
            details: payload.details,
            timestamp: payload.timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollPayload {
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub wait: WaitConditions,
    pub viewport: Viewport,
    pub max_scroll: MaxScroll,
    pub delay_ms: u64,
    pub details: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl From<ScrollPayload> for Action {
    fn from(payload: ScrollPayload) -> Self {
        Action::Scroll {
            scroll_x: payload.scroll_x,
            scroll_y: payload.scroll_y,
            wait: payload.wait,
            viewport: payload.viewport,
            max_scroll: payload.max_scroll,
            delay_ms: payload.delay_ms,
            details: payload.details,
            timestamp: payload.timestamp,
        }
    }
}

/// A single observed printable keystroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeystrokePayload {
    pub key: String,
    /// Tag name of the focused element, kept for descriptions; burst
    /// identity is the selector.
    pub target_tag: String,
    pub selector: String,
    pub fallback_selectors: Vec<String>,
    pub wait: WaitConditions,
    pub details: String,
    pub delay_ms: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackspacePayload {
    pub delay_ms: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
