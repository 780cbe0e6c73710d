//! Event observation and capture message construction.

use action_model::{Coordinates, WaitConditions};
use chrono::{DateTime, Utc};
use flowrec_protocol::{
    BackspacePayload, CaptureMessage, ClickPayload, KeystrokePayload, NavigatePayload,
    ScrollPayload,
};
use selector_engine::{describe, fallback_selectors, primary_selector, wait_conditions};
use selector_engine::{DomSnapshot, NodeId};
use tracing::debug;

use crate::context::PageContext;
use crate::scroll::ScrollGate;

/// Raw pointer position of a click, client and page space.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

/// Observes DOM events against a page context and emits one capture message
/// per semantic action. Owns the delay clock: every observed event advances
/// it, so `delay_ms` always measures the gap to the previous observation.
pub struct CaptureAgent {
    page: PageContext,
    last_action_at: DateTime<Utc>,
    scroll: ScrollGate,
}

impl CaptureAgent {
    pub fn new(page: PageContext, now: DateTime<Utc>) -> Self {
        Self {
            page,
            last_action_at: now,
            scroll: ScrollGate::new(),
        }
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    /// The embedding host updates page facts here (scroll offsets, URL,
    /// title) as the page changes.
    pub fn page_mut(&mut self) -> &mut PageContext {
        &mut self.page
    }

    fn bump_delay(&mut self, now: DateTime<Utc>) -> u64 {
        let delta = (now - self.last_action_at).num_milliseconds().max(0) as u64;
        self.last_action_at = now;
        delta
    }

    /// Report the page's current location as a navigation fact.
    pub fn observe_navigation(&mut self, now: DateTime<Utc>) -> CaptureMessage {
        let delay_ms = self.bump_delay(now);
        debug!(url = %self.page.url, "observed navigation");
        CaptureMessage::Navigate(NavigatePayload {
            url: self.page.url.clone(),
            wait: WaitConditions::for_navigation(),
            viewport: self.page.viewport(),
            delay_ms,
            details: format!("Navigation to {}", self.page.host_and_path()),
            timestamp: now,
        })
    }

    /// Report a click on `node`.
    pub fn observe_click(
        &mut self,
        dom: &DomSnapshot,
        node: NodeId,
        pointer: PointerInput,
        now: DateTime<Utc>,
    ) -> CaptureMessage {
        let delay_ms = self.bump_delay(now);
        let selector = primary_selector(dom, node);
        debug!(%selector, "observed click");
        CaptureMessage::Click(ClickPayload {
            selector,
            fallback_selectors: fallback_selectors(dom, node),
            wait: wait_conditions(dom, node),
            coordinates: Coordinates {
                x: pointer.client_x.round() as i32,
                y: pointer.client_y.round() as i32,
                page_x: pointer.page_x.round() as i32,
                page_y: pointer.page_y.round() as i32,
            },
            element_rect: dom.rect(node),
            viewport: self.page.viewport_with_scroll(),
            delay_ms,
            details: describe(dom, node),
            timestamp: now,
        })
    }

    /// Report a keydown on `node`.
    ///
    /// Backspace becomes a backspace fact; any other single printable
    /// character becomes a keystroke fact. Control keys produce nothing but
    /// still advance the delay clock, matching how a user perceives the gap
    /// between semantic actions.
    pub fn observe_key(
        &mut self,
        dom: &DomSnapshot,
        node: NodeId,
        key: &str,
        now: DateTime<Utc>,
    ) -> Option<CaptureMessage> {
        let delay_ms = self.bump_delay(now);
        if key == "Backspace" {
            return Some(CaptureMessage::Backspace(BackspacePayload {
                delay_ms,
                timestamp: now,
            }));
        }
        if key.chars().count() != 1 {
            return None;
        }
        Some(CaptureMessage::Keystroke(KeystrokePayload {
            key: key.to_string(),
            target_tag: dom.tag(node).to_string(),
            selector: primary_selector(dom, node),
            fallback_selectors: fallback_selectors(dom, node),
            wait: wait_conditions(dom, node),
            details: describe(dom, node),
            delay_ms,
            timestamp: now,
        }))
    }

    /// Note raw scroll movement; reports are deferred to [`Self::poll_scroll`].
    pub fn scroll_activity(&mut self, now: DateTime<Utc>) {
        self.scroll.record_activity(now);
    }

    /// Emit a scroll report if the burst has settled.
    pub fn poll_scroll(&mut self, now: DateTime<Utc>) -> Option<CaptureMessage> {
        if !self.scroll.should_emit(now) {
            return None;
        }
        let delay_ms = self.bump_delay(now);
        Some(CaptureMessage::Scroll(ScrollPayload {
            scroll_x: self.page.scroll_x,
            scroll_y: self.page.scroll_y,
            wait: WaitConditions::for_scroll(),
            viewport: self.page.viewport(),
            max_scroll: self.page.max_scroll(),
            delay_ms,
            details: format!(
                "Scrolled to position ({}, {}) on page: {}",
                self.page.scroll_x, self.page.scroll_y, self.page.title
            ),
            timestamp: now,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use selector_engine::ElementBuilder;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(ms)
    }

    fn login_dom() -> DomSnapshot {
        DomSnapshot::from_root(
            ElementBuilder::new("body").child(
                ElementBuilder::new("form")
                    .id("login")
                    .child(
                        ElementBuilder::new("input")
                            .attr("type", "email")
                            .attr("name", "email"),
                    )
                    .child(ElementBuilder::new("button").text("Sign in")),
            ),
        )
    }

    #[test]
    fn click_carries_locators_and_delay() {
        let dom = login_dom();
        let form = dom.find_by_dom_id("login").unwrap();
        let button = dom.children(form)[1];

        let page = PageContext::new("https://example.com/login", 1280, 800);
        let mut agent = CaptureAgent::new(page, at(0));
        let message = agent.observe_click(
            &dom,
            button,
            PointerInput {
                client_x: 100.4,
                client_y: 200.6,
                page_x: 100.4,
                page_y: 200.6,
            },
            at(250),
        );

        let CaptureMessage::Click(click) = message else {
            panic!("expected click message");
        };
        assert_eq!(click.selector, "form#login > button");
        assert_eq!(click.fallback_selectors, vec!["button:contains(\"Sign in\")"]);
        assert_eq!(click.delay_ms, 250);
        assert_eq!(click.coordinates.x, 100);
        assert_eq!(click.coordinates.y, 201);
        assert!(click.details.contains("LOGIN_BUTTON"));
    }

    #[test]
    fn control_keys_advance_clock_without_emitting() {
        let dom = login_dom();
        let form = dom.find_by_dom_id("login").unwrap();
        let input = dom.children(form)[0];

        let mut agent = CaptureAgent::new(PageContext::new("https://example.com", 800, 600), at(0));
        assert!(agent.observe_key(&dom, input, "Shift", at(100)).is_none());

        let message = agent.observe_key(&dom, input, "a", at(150)).unwrap();
        let CaptureMessage::Keystroke(keystroke) = message else {
            panic!("expected keystroke");
        };
        // Gap measured from the ignored Shift, not from t=0.
        assert_eq!(keystroke.delay_ms, 50);
        assert_eq!(keystroke.key, "a");
        assert_eq!(keystroke.target_tag, "input");
    }

    #[test]
    fn backspace_maps_to_backspace_fact() {
        let dom = login_dom();
        let form = dom.find_by_dom_id("login").unwrap();
        let input = dom.children(form)[0];

        let mut agent = CaptureAgent::new(PageContext::new("https://example.com", 800, 600), at(0));
        let message = agent.observe_key(&dom, input, "Backspace", at(40)).unwrap();
        assert!(matches!(message, CaptureMessage::Backspace(_)));
    }

    #[test]
    fn scroll_report_waits_for_settle() {
        let page = PageContext::new("https://example.com/feed", 1280, 800)
            .with_title("Feed")
            .with_document_size(1280, 4000);
        let mut agent = CaptureAgent::new(page, at(0));
        agent.page_mut().scroll_y = 600;

        agent.scroll_activity(at(10));
        assert!(agent.poll_scroll(at(30)).is_none());
        let message = agent.poll_scroll(at(80)).unwrap();
        let CaptureMessage::Scroll(scroll) = message else {
            panic!("expected scroll");
        };
        assert_eq!(scroll.scroll_y, 600);
        assert_eq!(scroll.max_scroll.y, 3200);
        assert_eq!(scroll.details, "Scrolled to position (0, 600) on page: Feed");
    }

    #[test]
    fn navigation_details_name_host_and_path() {
        let page = PageContext::new("https://shop.example.com/cart?step=1", 1024, 768);
        let mut agent = CaptureAgent::new(page, at(0));
        let CaptureMessage::Navigate(nav) = agent.observe_navigation(at(5)) else {
            panic!("expected navigate");
        };
        assert_eq!(nav.details, "Navigation to shop.example.com/cart");
        assert!(nav.wait.wait_for_navigation);
        assert_eq!(nav.wait.timeout_ms, 10_000);
    }
}
