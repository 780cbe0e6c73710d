//! Human-facing element descriptions.
//!
//! Advisory metadata for people reviewing a recorded log. Free-form, never
//! parsed by matching logic, so the vocabulary here can grow without
//! breaking replay.

use crate::dom::{DomSnapshot, NodeId};

/// Truncation bound for quoted element text.
const TEXT_PREVIEW_MAX: usize = 50;
/// How many ancestors are scanned for a search landmark.
const SEARCH_SCAN_DEPTH: usize = 5;

/// Describe `node` as `<tag> text:"..." id="..." ... [CONTEXT, CONTEXT]`.
pub fn describe(dom: &DomSnapshot, node: NodeId) -> String {
    let mut description = Vec::new();
    let mut context = Vec::new();

    let tag = dom.tag(node).to_string();
    description.push(format!("<{tag}>"));

    let text: String = dom
        .text_content(node)
        .trim()
        .chars()
        .take(TEXT_PREVIEW_MAX)
        .collect();
    if !text.is_empty() {
        description.push(format!("text:\"{text}\""));
    }

    if let Some(id) = dom.dom_id(node) {
        description.push(format!("id=\"{id}\""));
    }

    let classes = dom.classes(node);
    if !classes.is_empty() {
        let preview: Vec<&str> = classes.iter().take(3).map(String::as_str).collect();
        description.push(format!("class=\"{}\"", preview.join(" ")));
    }

    if tag == "input" {
        describe_input(dom, node, &mut description, &mut context);
    }

    let is_button_like =
        tag == "button" || (tag == "input" && dom.attr(node, "type") == Some("button"));
    if is_button_like {
        classify_button(dom, node, &text, &mut context);
    }

    if tag == "a" {
        describe_link(dom, node, &mut description, &mut context);
    }

    if tag == "form" {
        if let Some(action) = dom.attr(node, "action") {
            description.push(format!("action=\"{action}\""));
        }
        context.push("FORM_CONTAINER");
    }

    if let Some(aria_label) = dom.attr(node, "aria-label") {
        description.push(format!("aria-label=\"{aria_label}\""));
    }

    if let Some(role) = dom.attr(node, "role") {
        description.push(format!("role=\"{role}\""));
        match role {
            "searchbox" => context.push("SEARCH_INPUT"),
            "button" => context.push("BUTTON_ROLE"),
            "navigation" => context.push("NAVIGATION"),
            _ => {}
        }
    }

    if let Some(test_id) = dom
        .attr(node, "data-testid")
        .or_else(|| dom.attr(node, "data-test-id"))
    {
        description.push(format!("data-testid=\"{test_id}\""));
    }

    if let Some(parent) = dom.parent(node) {
        match dom.tag(parent) {
            "nav" => context.push("IN_NAVIGATION"),
            "header" => context.push("IN_HEADER"),
            "footer" => context.push("IN_FOOTER"),
            "form" => context.push("IN_FORM"),
            _ => {}
        }
    }

    if in_search_container(dom, node) {
        context.push("IN_SEARCH_CONTAINER");
    }

    let mut result = description.join(" ");
    if !context.is_empty() {
        result.push_str(&format!(" [{}]", context.join(", ")));
    }
    result
}

fn describe_input(
    dom: &DomSnapshot,
    node: NodeId,
    description: &mut Vec<String>,
    context: &mut Vec<&'static str>,
) {
    let input_type = dom.attr(node, "type").unwrap_or("text").to_string();
    description.push(format!("type=\"{input_type}\""));

    if let Some(placeholder) = dom.attr(node, "placeholder") {
        description.push(format!("placeholder=\"{placeholder}\""));
    }
    if let Some(name) = dom.attr(node, "name") {
        description.push(format!("name=\"{name}\""));
    }

    let placeholder = dom.attr(node, "placeholder").unwrap_or("").to_lowercase();
    let name = dom.attr(node, "name").unwrap_or("").to_lowercase();
    let id = dom.dom_id(node).unwrap_or("").to_lowercase();

    if input_type == "search"
        || placeholder.contains("search")
        || name.contains("search")
        || id.contains("search")
    {
        context.push("SEARCH_INPUT");
    } else if placeholder.contains("email") || name.contains("email") || input_type == "email" {
        context.push("EMAIL_INPUT");
    } else if placeholder.contains("password")
        || name.contains("password")
        || input_type == "password"
    {
        context.push("PASSWORD_INPUT");
    } else if placeholder.contains("filter") || name.contains("filter") {
        context.push("FILTER_INPUT");
    } else if input_type == "submit" {
        context.push("SUBMIT_BUTTON");
    }
}

fn classify_button(dom: &DomSnapshot, node: NodeId, text: &str, context: &mut Vec<&'static str>) {
    let button_text = text.to_lowercase();
    let aria_label = dom.attr(node, "aria-label").unwrap_or("").to_lowercase();

    if button_text.contains("search") || aria_label.contains("search") {
        context.push("SEARCH_BUTTON");
    } else if button_text.contains("submit") || button_text.contains("send") {
        context.push("SUBMIT_BUTTON");
    } else if button_text.contains("login") || button_text.contains("sign in") {
        context.push("LOGIN_BUTTON");
    } else if button_text.contains("register") || button_text.contains("sign up") {
        context.push("REGISTER_BUTTON");
    } else if button_text.contains("add") || button_text.contains("create") {
        context.push("ADD_BUTTON");
    } else if button_text.contains("delete") || button_text.contains("remove") {
        context.push("DELETE_BUTTON");
    } else if button_text.contains("edit") || button_text.contains("modify") {
        context.push("EDIT_BUTTON");
    } else if button_text.contains("cancel") || button_text.contains("close") {
        context.push("CANCEL_BUTTON");
    }
}

fn describe_link(
    dom: &DomSnapshot,
    node: NodeId,
    description: &mut Vec<String>,
    context: &mut Vec<&'static str>,
) {
    let Some(href) = dom.attr(node, "href") else {
        return;
    };
    description.push(format!("href=\"{href}\""));

    if href.contains('#') {
        context.push("ANCHOR_LINK");
    } else if href.starts_with("mailto:") {
        context.push("EMAIL_LINK");
    } else if href.starts_with("tel:") {
        context.push("PHONE_LINK");
    } else {
        context.push("EXTERNAL_LINK");
    }
}

fn in_search_container(dom: &DomSnapshot, node: NodeId) -> bool {
    let mut current = dom.parent(node);
    let mut depth = 0;
    while let Some(ancestor) = current {
        if depth >= SEARCH_SCAN_DEPTH {
            break;
        }
        let class_match = dom
            .classes(ancestor)
            .iter()
            .any(|class| class.to_lowercase().contains("search"));
        let id_match = dom
            .dom_id(ancestor)
            .map(|id| id.to_lowercase().contains("search"))
            .unwrap_or(false);
        if class_match || id_match {
            return true;
        }
        current = dom.parent(ancestor);
        depth += 1;
    }
    false
}
