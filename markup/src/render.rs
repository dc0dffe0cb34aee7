//! Serialize a tree to markup text.
//!
//! DESIGN
//! ======
//! Depth-first, pre-order, single pass into one `String`. The walk only reads
//! the tree, so the same tree always renders to the same text. No nesting
//! validation is performed; void elements drop any children they were given
//! instead of failing.

use std::borrow::Cow;

use crate::attr::AttrValue;
use crate::node::{Element, Node};

/// Tags that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const DOCTYPE: &str = "<!DOCTYPE html>\n";

#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Render a node and its subtree.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Render an element and its subtree.
#[must_use]
pub fn render_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

/// Render a full page, prefixed with the HTML5 doctype.
#[must_use]
pub fn render_document(root: &Node) -> String {
    let mut out = String::from(DOCTYPE);
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(content) => out.push_str(&escape_text(content)),
        Node::Raw(markup) => out.push_str(markup),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag());
    for attr in el.attributes() {
        out.push(' ');
        out.push_str(attr.key());
        if let AttrValue::Text(value) = attr.attr_value() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void(el.tag()) {
        return;
    }

    for child in el.children() {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

// =============================================================================
// ESCAPING
// =============================================================================

/// Escape text content. Borrows when nothing needs escaping.
#[must_use]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape(input)
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape(input)
}

fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
