//! Geometry snapshots carried on captured actions.

use serde::{Deserialize, Serialize};

/// Viewport state at capture time. Scroll offsets are only populated for
/// click actions, where the replay engine needs them to translate page
/// coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_y: Option<i32>,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_x: None,
            scroll_y: None,
        }
    }

    pub fn with_scroll(mut self, scroll_x: i32, scroll_y: i32) -> Self {
        self.scroll_x = Some(scroll_x);
        self.scroll_y = Some(scroll_y);
        self
    }
}

/// Pointer position of a click, in both client and page space, rounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
    pub page_x: i32,
    pub page_y: i32,
}

/// Bounding rectangle of the clicked element, rounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ElementRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Furthest reachable scroll offsets, `document size - viewport`, never
/// negative.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MaxScroll {
    pub x: i32,
    pub y: i32,
}

impl MaxScroll {
    pub fn from_bounds(doc_width: u32, doc_height: u32, viewport: Viewport) -> Self {
        Self {
            x: (doc_width as i64 - viewport.width as i64).max(0) as i32,
            y: (doc_height as i64 - viewport.height as i64).max(0) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scroll_clamps_at_zero() {
        let vp = Viewport::new(1280, 800);
        let max = MaxScroll::from_bounds(1024, 3000, vp);
        assert_eq!(max.x, 0);
        assert_eq!(max.y, 2200);
    }
}
