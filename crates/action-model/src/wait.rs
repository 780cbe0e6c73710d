//! Readiness conditions attached to captured actions.
//!
//! These are heuristics snapshotted from the element's live state at capture
//! time. A replay engine must still poll; the flags only tell it what to
//! poll for.

use serde::{Deserialize, Serialize};

/// Default timeout for element-targeted actions.
pub const DOM_ACTION_TIMEOUT_MS: u64 = 5_000;
/// Default timeout for full navigations.
pub const NAVIGATION_TIMEOUT_MS: u64 = 10_000;
/// Default timeout for scroll restoration.
pub const SCROLL_TIMEOUT_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitConditions {
    pub wait_for_selector: bool,
    pub wait_for_visible: bool,
    pub wait_for_enabled: bool,
    pub wait_for_clickable: bool,
    pub wait_for_navigation: bool,
    pub timeout_ms: u64,
}

impl WaitConditions {
    /// Conditions for an element-targeted action, from the element's live
    /// visibility, disabled flag and pointer-events state.
    pub fn for_element(visible: bool, enabled: bool, clickable: bool) -> Self {
        Self {
            wait_for_selector: true,
            wait_for_visible: visible,
            wait_for_enabled: enabled,
            wait_for_clickable: clickable,
            wait_for_navigation: false,
            timeout_ms: DOM_ACTION_TIMEOUT_MS,
        }
    }

    /// Conditions for a navigation action; no element is involved.
    pub fn for_navigation() -> Self {
        Self {
            wait_for_selector: false,
            wait_for_visible: false,
            wait_for_enabled: false,
            wait_for_clickable: false,
            wait_for_navigation: true,
            timeout_ms: NAVIGATION_TIMEOUT_MS,
        }
    }

    /// Conditions for a scroll action.
    pub fn for_scroll() -> Self {
        Self {
            wait_for_selector: false,
            wait_for_visible: false,
            wait_for_enabled: false,
            wait_for_clickable: false,
            wait_for_navigation: false,
            timeout_ms: SCROLL_TIMEOUT_MS,
        }
    }
}
