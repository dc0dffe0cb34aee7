//! Global and element attribute helpers.
//!
//! Names follow the HTML attribute they emit. `type` is spelled `r#type`.

use std::borrow::Cow;

use crate::attr::{Attribute, Style};

/// Arbitrary attribute. An empty key is rejected when the attribute is
/// attached to an element.
pub fn custom(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Attribute {
    Attribute::new(key, value)
}

/// `data-{name}`.
pub fn data(name: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(format!("data-{name}"), value)
}

/// `aria-{name}`.
pub fn aria(name: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(format!("aria-{name}"), value)
}

/// One CSS declaration, merged with any others on the same element.
pub fn style(property: impl Into<String>, value: impl Into<String>) -> Style {
    Style::new(property, value)
}

pub fn id(value: impl Into<String>) -> Attribute {
    Attribute::new("id", value)
}

pub fn class(value: impl Into<String>) -> Attribute {
    Attribute::new("class", value)
}

pub fn title(value: impl Into<String>) -> Attribute {
    Attribute::new("title", value)
}

pub fn lang(value: impl Into<String>) -> Attribute {
    Attribute::new("lang", value)
}

pub fn charset(value: impl Into<String>) -> Attribute {
    Attribute::new("charset", value)
}

pub fn name(value: impl Into<String>) -> Attribute {
    Attribute::new("name", value)
}

pub fn content(value: impl Into<String>) -> Attribute {
    Attribute::new("content", value)
}

pub fn href(value: impl Into<String>) -> Attribute {
    Attribute::new("href", value)
}

pub fn src(value: impl Into<String>) -> Attribute {
    Attribute::new("src", value)
}

pub fn rel(value: impl Into<String>) -> Attribute {
    Attribute::new("rel", value)
}

pub fn r#type(value: impl Into<String>) -> Attribute {
    Attribute::new("type", value)
}

pub fn value(value: impl Into<String>) -> Attribute {
    Attribute::new("value", value)
}

pub fn placeholder(value: impl Into<String>) -> Attribute {
    Attribute::new("placeholder", value)
}

pub fn action(value: impl Into<String>) -> Attribute {
    Attribute::new("action", value)
}

pub fn method(value: impl Into<String>) -> Attribute {
    Attribute::new("method", value)
}

// Boolean attributes.

pub fn required() -> Attribute {
    Attribute::flag("required")
}

pub fn disabled() -> Attribute {
    Attribute::flag("disabled")
}

pub fn checked() -> Attribute {
    Attribute::flag("checked")
}

pub fn defer() -> Attribute {
    Attribute::flag("defer")
}

pub fn autofocus() -> Attribute {
    Attribute::flag("autofocus")
}

// SVG presentation attributes used by inline icons.

pub fn view_box(value: impl Into<String>) -> Attribute {
    Attribute::new("viewBox", value)
}

pub fn xmlns(value: impl Into<String>) -> Attribute {
    Attribute::new("xmlns", value)
}

pub fn width(value: impl Into<String>) -> Attribute {
    Attribute::new("width", value)
}

pub fn height(value: impl Into<String>) -> Attribute {
    Attribute::new("height", value)
}

pub fn fill(value: impl Into<String>) -> Attribute {
    Attribute::new("fill", value)
}

pub fn stroke(value: impl Into<String>) -> Attribute {
    Attribute::new("stroke", value)
}

pub fn stroke_width(value: impl Into<String>) -> Attribute {
    Attribute::new("stroke-width", value)
}

pub fn stroke_linecap(value: impl Into<String>) -> Attribute {
    Attribute::new("stroke-linecap", value)
}

pub fn stroke_linejoin(value: impl Into<String>) -> Attribute {
    Attribute::new("stroke-linejoin", value)
}

pub fn d(value: impl Into<String>) -> Attribute {
    Attribute::new("d", value)
}

pub fn points(value: impl Into<String>) -> Attribute {
    Attribute::new("points", value)
}
