//! Readiness snapshot from live element state.

use action_model::WaitConditions;

use crate::dom::{DomSnapshot, NodeId};

/// Visible means rendered: not `display: none` and not `visibility: hidden`.
pub fn is_visible(dom: &DomSnapshot, node: NodeId) -> bool {
    let style = dom.style(node);
    style.display != "none" && style.visibility != "hidden"
}

/// Clickable means the pointer can land on it: pointer-events enabled on a
/// visible element.
pub fn is_clickable(dom: &DomSnapshot, node: NodeId) -> bool {
    dom.style(node).pointer_events != "none" && is_visible(dom, node)
}

/// Snapshot the element's readiness into the wait conditions carried on the
/// captured action.
pub fn wait_conditions(dom: &DomSnapshot, node: NodeId) -> WaitConditions {
    WaitConditions::for_element(
        is_visible(dom, node),
        !dom.is_disabled(node),
        is_clickable(dom, node),
    )
}
