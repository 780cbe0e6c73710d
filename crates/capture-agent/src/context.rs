//! Read-only page facts the agent samples at capture time.

use action_model::{MaxScroll, Viewport};

/// Window-level state of the observed page. The embedding host keeps this
/// current; the agent only ever reads it.
#[derive(Clone, Debug)]
pub struct PageContext {
    pub url: String,
    pub title: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub doc_width: u32,
    pub doc_height: u32,
}

impl PageContext {
    pub fn new(url: impl Into<String>, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            viewport_width,
            viewport_height,
            scroll_x: 0,
            scroll_y: 0,
            doc_width: viewport_width,
            doc_height: viewport_height,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_document_size(mut self, width: u32, height: u32) -> Self {
        self.doc_width = width;
        self.doc_height = height;
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    pub fn viewport_with_scroll(&self) -> Viewport {
        self.viewport().with_scroll(self.scroll_x, self.scroll_y)
    }

    pub fn max_scroll(&self) -> MaxScroll {
        MaxScroll::from_bounds(self.doc_width, self.doc_height, self.viewport())
    }

    /// `host + path` of the current URL, for navigation descriptions.
    pub fn host_and_path(&self) -> String {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        rest.split(['?', '#']).next().unwrap_or(rest).to_string()
    }
}
