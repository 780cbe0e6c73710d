//! Ranked fallback selectors.
//!
//! Each strategy is computed independently; a replay engine tries them in
//! order until exactly one live element matches.

use crate::dom::{DomSnapshot, NodeId};

/// Longest slice of trimmed text carried into a `:contains` hint.
const TEXT_HINT_MAX: usize = 20;

/// Compute the fallback list for `node`, in replay priority order:
/// test attribute, first class token, same-tag structural index, text
/// containment hint (buttons and links only), then type attribute.
pub fn fallback_selectors(dom: &DomSnapshot, node: NodeId) -> Vec<String> {
    let mut fallbacks = Vec::new();
    let tag = dom.tag(node);

    if let Some(test_id) = dom
        .attr(node, "data-testid")
        .or_else(|| dom.attr(node, "data-test-id"))
    {
        fallbacks.push(format!("[data-testid=\"{test_id}\"]"));
    }

    if let Some(first_class) = dom.classes(node).first() {
        fallbacks.push(format!(".{first_class}"));
    }

    let (position, total) = dom.same_tag_position(node);
    if total > 1 {
        fallbacks.push(format!("{tag}:nth-child({position})"));
    }

    if tag == "button" || tag == "a" {
        let text = dom.text_content(node);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            let hint: String = trimmed.chars().take(TEXT_HINT_MAX).collect();
            // Not standard CSS; replay engines match this with their own
            // text-containment logic.
            fallbacks.push(format!("{tag}:contains(\"{hint}\")"));
        }
    }

    if let Some(input_type) = dom.attr(node, "type") {
        fallbacks.push(format!("{tag}[type=\"{input_type}\"]"));
    }

    fallbacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementBuilder;

    #[test]
    fn all_strategies_stack_in_order() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("form")
                .child(ElementBuilder::new("button"))
                .child(
                    ElementBuilder::new("button")
                        .id("go")
                        .classes("btn btn-primary")
                        .attr("data-testid", "submit-btn")
                        .attr("type", "submit")
                        .text("Submit order"),
                ),
        );
        let button = dom.find_by_dom_id("go").unwrap();
        assert_eq!(
            fallback_selectors(&dom, button),
            vec![
                "[data-testid=\"submit-btn\"]",
                ".btn",
                "button:nth-child(2)",
                "button:contains(\"Submit order\")",
                "button[type=\"submit\"]",
            ]
        );
    }

    #[test]
    fn text_hint_truncates_to_twenty_chars() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("a").text("  An unreasonably long link caption  "),
        );
        let fallbacks = fallback_selectors(&dom, dom.root());
        assert_eq!(fallbacks, vec!["a:contains(\"An unreasonably long\")"]);
    }

    #[test]
    fn lone_sibling_gets_no_structural_fallback() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("div").child(ElementBuilder::new("input").id("q")),
        );
        let input = dom.find_by_dom_id("q").unwrap();
        assert!(fallback_selectors(&dom, input).is_empty());
    }

    #[test]
    fn alternate_test_attribute_spelling_is_honored() {
        let dom =
            DomSnapshot::from_root(ElementBuilder::new("span").attr("data-test-id", "badge"));
        assert_eq!(
            fallback_selectors(&dom, dom.root()),
            vec!["[data-testid=\"badge\"]"]
        );
    }
}
