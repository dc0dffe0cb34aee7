//! Tag constructors.
//!
//! Each function takes an argument list (usually built with [`args!`]) and
//! returns a [`Markup`]. `<title>` and `<style>` are exposed as `head_title`
//! and `head_style` so they do not collide with the attribute helpers of the
//! same name.
//!
//! [`args!`]: crate::args

use crate::node::{Arg, Element, Markup, Node};

macro_rules! tags {
    ($($fn_name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">`")]
            pub fn $fn_name(args: impl IntoIterator<Item = Arg>) -> Markup {
                Element::build($tag, args).map(Node::Element)
            }
        )*
    };
}

tags! {
    // Document.
    html => "html",
    head => "head",
    head_title => "title",
    head_style => "style",
    meta => "meta",
    link => "link",
    script => "script",
    body => "body",

    // Sections.
    header => "header",
    footer => "footer",
    main => "main",
    nav => "nav",
    section => "section",
    article => "article",
    aside => "aside",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",

    // Grouping and text.
    div => "div",
    p => "p",
    span => "span",
    strong => "strong",
    em => "em",
    code => "code",
    pre => "pre",
    a => "a",
    ul => "ul",
    ol => "ol",
    li => "li",
    br => "br",
    hr => "hr",
    img => "img",

    // Forms.
    form => "form",
    label => "label",
    input => "input",
    button => "button",
    select => "select",
    option => "option",
    textarea => "textarea",

    // Inline SVG.
    svg => "svg",
    path => "path",
    circle => "circle",
    line => "line",
    polyline => "polyline",
    polygon => "polygon",
    rect => "rect",
}

/// Element with a caller-supplied tag.
///
/// # Errors
///
/// `EmptyTag` when `tag` is empty, plus anything [`Element::build`] reports.
pub fn element(tag: impl Into<String>, args: impl IntoIterator<Item = Arg>) -> Markup {
    Element::build(tag.into(), args).map(Node::Element)
}
