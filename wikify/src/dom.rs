//! Element tree access
//!
//! This module is the boundary to the upstream parsing collaborator. The
//! translator consumes rcdom trees (`markup5ever_rcdom`), the same DOM the
//! html5ever parser produces: reference-counted nodes with ordered children,
//! weak parent links and attribute lists. Everything here is read-only access;
//! the translation engine never mutates a tree.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` ecosystem for HTML parsing:
//! - `html5ever`: browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: reference-counted DOM tree implementation
//!
//! html5ever is error-recovering, so `parse_html` always yields a tree; the
//! translator itself never sees raw HTML bytes.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::TranslateError;

/// Parse HTML source into a document handle.
///
/// This is the upstream producer seam: callers that already hold a parsed
/// tree (e.g. from an HTML cleanup pipeline) can hand it to the translator
/// directly and skip this function.
pub fn parse_html(source: &str) -> Handle {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
    dom.document
}

/// The element's local tag name, or None for non-element nodes.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Look up an attribute value by local name.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Snapshot of the node's children, in document order.
pub fn children(node: &Handle) -> Vec<Handle> {
    node.children.borrow().clone()
}

/// Concatenated text content of the subtree, in document order.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Find the document's `body` element.
pub fn body(document: &Handle) -> Result<Handle, TranslateError> {
    find_element(document, "body")
        .ok_or_else(|| TranslateError::MalformedDocument("document has no body element".into()))
}

/// Depth-first search for the first element with the given tag name.
pub fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if tag_name(node) == Some(tag) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Render an indented outline of the tree, for inspection.
///
/// Elements show their tag (and attributes when `show_attributes` is set),
/// text nodes show a trimmed excerpt. Blank text nodes are omitted.
pub fn outline(node: &Handle, show_attributes: bool) -> String {
    let mut out = String::new();
    outline_node(node, 0, show_attributes, &mut out);
    out
}

fn outline_node(node: &Handle, depth: usize, show_attributes: bool, out: &mut String) {
    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                outline_node(child, depth, show_attributes, out);
            }
            return;
        }
        NodeData::Element { name, attrs, .. } => {
            out.push_str(&"  ".repeat(depth));
            out.push_str(name.local.as_ref());
            if show_attributes {
                for attr in attrs.borrow().iter() {
                    out.push_str(&format!(" {}=\"{}\"", attr.name.local, attr.value));
                }
            }
            out.push('\n');
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(&"  ".repeat(depth));
                out.push_str(&format!("\"{trimmed}\"\n"));
            }
            return;
        }
        _ => return,
    }
    for child in node.children.borrow().iter() {
        outline_node(child, depth + 1, show_attributes, out);
    }
}
