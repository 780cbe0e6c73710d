//! Immutable DOM snapshot.
//!
//! The capture agent never mutates the page; it reads geometry, computed
//! style and structure. This arena is that read-only view made explicit:
//! nodes are stored flat, parent/child links are indexes, and a `NodeId` is
//! only ever handed out by the snapshot that owns it.

use std::collections::BTreeMap;

use action_model::ElementRect;

/// Computed-style facts the readiness checks depend on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub pointer_events: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".into(),
            visibility: "visible".into(),
            pointer_events: "auto".into(),
        }
    }
}

impl ComputedStyle {
    pub fn hidden() -> Self {
        Self {
            display: "none".into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub style: ComputedStyle,
    pub disabled: bool,
    pub rect: ElementRect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Index of a node inside its owning [`DomSnapshot`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Flattened element tree captured from a live page at one instant.
#[derive(Clone, Debug)]
pub struct DomSnapshot {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl DomSnapshot {
    pub fn from_root(root: ElementBuilder) -> Self {
        let mut nodes = Vec::new();
        let root_id = flatten(root, None, &mut nodes);
        Self {
            nodes,
            root: root_id,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn dom_id(&self, id: NodeId) -> Option<&str> {
        self.node(id).dom_id.as_deref()
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attrs.get(name).map(String::as_str)
    }

    pub fn style(&self, id: NodeId) -> &ComputedStyle {
        &self.node(id).style
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.node(id).disabled
    }

    pub fn rect(&self, id: NodeId) -> ElementRect {
        self.node(id).rect
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Subtree text, the way `textContent` reads on a live node.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        out.push_str(&self.node(id).text);
        for child in &self.node(id).children {
            self.collect_text(*child, out);
        }
    }

    /// Siblings under the same parent sharing this node's tag, and this
    /// node's 1-based position among them.
    pub fn same_tag_position(&self, id: NodeId) -> (usize, usize) {
        let Some(parent) = self.parent(id) else {
            return (1, 1);
        };
        let tag = self.tag(id);
        let mut total = 0;
        let mut position = 0;
        for sibling in self.children(parent) {
            if self.tag(*sibling) == tag {
                total += 1;
                if *sibling == id {
                    position = total;
                }
            }
        }
        (position, total)
    }

    /// First node carrying the given document id, depth-first. Test and
    /// harness convenience.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|id| self.dom_id(*id) == Some(dom_id))
    }
}

fn flatten(builder: ElementBuilder, parent: Option<NodeId>, nodes: &mut Vec<NodeData>) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(NodeData {
        tag: builder.tag,
        dom_id: builder.dom_id,
        classes: builder.classes,
        attrs: builder.attrs,
        text: builder.text,
        style: builder.style,
        disabled: builder.disabled,
        rect: builder.rect,
        parent,
        children: Vec::new(),
    });
    for child in builder.children {
        let child_id = flatten(child, Some(id), nodes);
        nodes[id.0].children.push(child_id);
    }
    id
}

/// Nested builder used to assemble snapshots in harnesses and tests.
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    tag: String,
    dom_id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    style: ComputedStyle,
    disabled: bool,
    rect: ElementRect,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            dom_id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            style: ComputedStyle::default(),
            disabled: false,
            rect: ElementRect::default(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    /// Space-separated class list, as the `class` attribute reads.
    pub fn classes(mut self, class_attr: &str) -> Self {
        self.classes = class_attr
            .split_whitespace()
            .map(|token| token.to_string())
            .collect();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn rect(mut self, rect: ElementRect) -> Self {
        self.rect = rect;
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_concatenates_subtree() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("div").text("a").child(
                ElementBuilder::new("span")
                    .text("b")
                    .child(ElementBuilder::new("b").text("c")),
            ),
        );
        assert_eq!(dom.text_content(dom.root()), "abc");
    }

    #[test]
    fn same_tag_position_counts_only_matching_siblings() {
        let dom = DomSnapshot::from_root(
            ElementBuilder::new("ul")
                .child(ElementBuilder::new("li"))
                .child(ElementBuilder::new("span"))
                .child(ElementBuilder::new("li").id("target")),
        );
        let target = dom.find_by_dom_id("target").unwrap();
        assert_eq!(dom.same_tag_position(target), (2, 2));
    }

    #[test]
    fn root_position_is_singleton() {
        let dom = DomSnapshot::from_root(ElementBuilder::new("html"));
        assert_eq!(dom.same_tag_position(dom.root()), (1, 1));
    }
}
