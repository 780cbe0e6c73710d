//! Primary selector derivation.

use tracing::trace;

use crate::dom::{DomSnapshot, NodeId};

/// Derive the primary selector for `node`.
///
/// An element with its own document id resolves to `#id` outright. Otherwise
/// the path is built leaf-to-root: each segment is the tag name, with a
/// 1-based `:nth-of-type(n)` disambiguator appended only when more than one
/// same-tag sibling shares the parent. The climb stops at the first ancestor
/// carrying an id, which anchors the path as `tag#id`; structure above an
/// identified ancestor adds nothing to uniqueness.
pub fn primary_selector(dom: &DomSnapshot, node: NodeId) -> String {
    if let Some(id) = dom.dom_id(node) {
        return format!("#{id}");
    }

    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        if let Some(dom_id) = dom.dom_id(id) {
            path.push(format!("{}#{}", dom.tag(id), dom_id));
            break;
        }

        let mut segment = dom.tag(id).to_string();
        let (position, total) = dom.same_tag_position(id);
        if total > 1 {
            segment.push_str(&format!(":nth-of-type({position})"));
        }
        path.push(segment);
        current = dom.parent(id);
    }

    path.reverse();
    let selector = path.join(" > ");
    trace!(%selector, "derived primary selector");
    selector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementBuilder;

    #[test]
    fn own_id_short_circuits() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("div").child(ElementBuilder::new("button").id("go")),
        );
        let button = dom.find_by_dom_id("go").unwrap();
        assert_eq!(primary_selector(&dom, button), "#go");
    }

    #[test]
    fn path_indexes_only_ambiguous_segments() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("body").child(
                ElementBuilder::new("ul")
                    .child(ElementBuilder::new("li"))
                    .child(ElementBuilder::new("li").child(ElementBuilder::new("a").id("x"))),
            ),
        );
        let anchor = dom.find_by_dom_id("x").unwrap();
        // The anchor has an id of its own, so take its parent li instead.
        let li = dom.parent(anchor).unwrap();
        assert_eq!(
            primary_selector(&dom, li),
            "body > ul > li:nth-of-type(2)"
        );
    }

    #[test]
    fn climb_stops_at_identified_ancestor() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("body").child(
                ElementBuilder::new("form")
                    .id("login")
                    .child(ElementBuilder::new("input").attr("type", "text")),
            ),
        );
        let form = dom.find_by_dom_id("login").unwrap();
        let input = dom.children(form)[0];
        assert_eq!(primary_selector(&dom, input), "form#login > input");
    }

    #[test]
    fn generation_is_deterministic() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("div")
                .child(ElementBuilder::new("p"))
                .child(ElementBuilder::new("p").classes("lead")),
        );
        let target = dom.children(dom.root())[1];
        let first = primary_selector(&dom, target);
        let second = primary_selector(&dom, target);
        assert_eq!(first, second);
        assert_eq!(first, "div > p:nth-of-type(2)");
    }
}
