//! Attributes and the per-element attribute set.
//!
//! DESIGN
//! ======
//! `AttributeSet` is a small ordered vector rather than a map: elements carry a
//! handful of attributes, and render order must follow insertion order.
//! Inserting a key that is already present replaces the value in place, so the
//! key keeps its original position while the last write wins.

use std::borrow::Cow;

// =============================================================================
// ATTRIBUTE
// =============================================================================

/// Value half of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `key="value"`.
    Text(String),
    /// Boolean attribute: presence means true, rendered as the bare key.
    Present,
}

/// A single `key="value"` pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: Cow<'static, str>,
    value: AttrValue,
}

impl Attribute {
    /// Attribute with a text value. Keys are validated when the attribute is
    /// attached to an element, not here.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: AttrValue::Text(value.into()) }
    }

    /// Boolean attribute rendered without a value (`required`, `defer`).
    pub fn flag(key: impl Into<Cow<'static, str>>) -> Self {
        Self { key: key.into(), value: AttrValue::Present }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Text value, or `None` for boolean attributes.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            AttrValue::Text(v) => Some(v),
            AttrValue::Present => None,
        }
    }

    #[must_use]
    pub fn attr_value(&self) -> &AttrValue {
        &self.value
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self.value, AttrValue::Present)
    }
}

// =============================================================================
// STYLE DECLARATION
// =============================================================================

/// One CSS declaration. Multiple declarations on the same element are merged
/// into a single `style` attribute, in the order supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub property: String,
    pub value: String,
}

impl Style {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self { property: property.into(), value: value.into() }
    }

    fn declaration(&self) -> String {
        format!("{}: {}", self.property, self.value)
    }
}

// =============================================================================
// ATTRIBUTE SET
// =============================================================================

const STYLE_KEY: &str = "style";

/// Ordered, key-unique collection of attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<Attribute>,
}

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn insert(&mut self, attr: Attribute) {
        match self.entries.iter_mut().find(|existing| existing.key == attr.key) {
            Some(existing) => *existing = attr,
            None => self.entries.push(attr),
        }
    }

    /// Append a declaration to the `style` attribute, creating it if needed.
    pub fn push_style(&mut self, style: &Style) {
        let declaration = style.declaration();
        match self.entries.iter_mut().find(|existing| existing.key == STYLE_KEY) {
            Some(existing) => {
                existing.value = match &existing.value {
                    AttrValue::Text(current) if !current.is_empty() => {
                        AttrValue::Text(format!("{current}; {declaration}"))
                    }
                    _ => AttrValue::Text(declaration),
                };
            }
            None => self.entries.push(Attribute::new(STYLE_KEY, declaration)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.entries.iter().find(|attr| attr.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "attr_test.rs"]
mod tests;
