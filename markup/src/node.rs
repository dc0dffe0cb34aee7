//! Tree nodes and heterogeneous constructor arguments.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt;

use crate::attr::{Attribute, AttributeSet, Style};
use crate::error::MarkupError;
use crate::render;

/// Result of a tag constructor.
pub type Markup = Result<Node, MarkupError>;

// =============================================================================
// NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped on render.
    Text(String),
    /// Trusted markup emitted verbatim. Use for raw-text contexts such as
    /// `<style>` bodies where entity escaping would corrupt the content.
    Raw(String),
}

/// Text leaf.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Verbatim markup leaf.
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

impl Node {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attributes: AttributeSet,
    children: Vec<Node>,
}

impl Element {
    /// Assemble an element from a mixed argument list.
    ///
    /// Attributes go into the attribute set (last occurrence of a key wins),
    /// style declarations merge into `style`, and everything else becomes a
    /// child in the order supplied.
    ///
    /// # Errors
    ///
    /// `EmptyTag` for an empty tag, `EmptyAttributeKey` for an attribute with
    /// an empty key, or whatever error an `Arg::Invalid` carries (typically a
    /// failed nested constructor).
    pub fn build(
        tag: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, MarkupError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MarkupError::EmptyTag);
        }
        let mut element = Self { tag, attributes: AttributeSet::new(), children: Vec::new() };
        for arg in args {
            element.apply(arg)?;
        }
        Ok(element)
    }

    fn apply(&mut self, arg: Arg) -> Result<(), MarkupError> {
        match arg {
            Arg::Attr(attr) => {
                if attr.key().is_empty() {
                    return Err(MarkupError::EmptyAttributeKey { tag: self.tag.to_string() });
                }
                self.attributes.insert(attr);
            }
            Arg::Style(style) => self.attributes.push_style(&style),
            Arg::Node(node) => self.children.push(node),
            Arg::Nodes(nodes) => self.children.extend(nodes),
            Arg::Text(content) => self.children.push(Node::Text(content)),
            Arg::Empty => {}
            Arg::Invalid(err) => return Err(err),
        }
        Ok(())
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Convenience lookup of a text attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Attribute::value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_element(self))
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// One argument to a tag constructor. Closed set: anything else does not
/// type-check, except through [`Arg::from_any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Attr(Attribute),
    Style(Style),
    Node(Node),
    Nodes(Vec<Node>),
    Text(String),
    /// Contributes nothing; produced by `None`.
    Empty,
    /// A failed nested construction. Aborts the enclosing element.
    Invalid(MarkupError),
}

impl Arg {
    /// Classify a dynamically typed value by capability.
    ///
    /// Accepts `Arg`, `Attribute`, `Style`, `Node`, `Element`, `String`,
    /// `&'static str` and `char`.
    ///
    /// # Errors
    ///
    /// `UnsupportedArgument` naming the concrete type for anything else.
    pub fn from_any<T: Any>(value: T) -> Result<Self, MarkupError> {
        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<Arg>() {
            Ok(arg) => return Ok(*arg),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Attribute>() {
            Ok(attr) => return Ok(Arg::Attr(*attr)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Style>() {
            Ok(style) => return Ok(Arg::Style(*style)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Node>() {
            Ok(node) => return Ok(Arg::Node(*node)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Element>() {
            Ok(el) => return Ok(Arg::Node(Node::Element(*el))),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<String>() {
            Ok(s) => return Ok(Arg::Text(*s)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<&'static str>() {
            Ok(s) => return Ok(Arg::Text((*s).to_owned())),
            Err(other) => other,
        };
        match boxed.downcast::<char>() {
            Ok(c) => Ok(Arg::Text(c.to_string())),
            Err(_) => Err(MarkupError::UnsupportedArgument { type_name: type_name::<T>() }),
        }
    }
}

impl From<Attribute> for Arg {
    fn from(attr: Attribute) -> Self {
        Arg::Attr(attr)
    }
}

impl From<Style> for Arg {
    fn from(style: Style) -> Self {
        Arg::Style(style)
    }
}

impl From<Node> for Arg {
    fn from(node: Node) -> Self {
        Arg::Node(node)
    }
}

impl From<Element> for Arg {
    fn from(el: Element) -> Self {
        Arg::Node(Node::Element(el))
    }
}

impl From<Vec<Node>> for Arg {
    fn from(nodes: Vec<Node>) -> Self {
        Arg::Nodes(nodes)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Text(s.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Empty, Into::into)
    }
}

impl From<Result<Node, MarkupError>> for Arg {
    fn from(result: Result<Node, MarkupError>) -> Self {
        match result {
            Ok(node) => Arg::Node(node),
            Err(err) => Arg::Invalid(err),
        }
    }
}

impl From<Result<Vec<Node>, MarkupError>> for Arg {
    fn from(result: Result<Vec<Node>, MarkupError>) -> Self {
        match result {
            Ok(nodes) => Arg::Nodes(nodes),
            Err(err) => Arg::Invalid(err),
        }
    }
}

impl From<Result<Arg, MarkupError>> for Arg {
    fn from(result: Result<Arg, MarkupError>) -> Self {
        result.unwrap_or_else(Arg::Invalid)
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
