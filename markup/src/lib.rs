//! Type-safe HTML construction and rendering.
//!
//! ARCHITECTURE
//! ============
//! Callers build an immutable tree of [`Node`]s by handing heterogeneous
//! [`Arg`] lists to tag constructors (see [`tags`]). Attributes and children
//! are partitioned at construction time; the renderer then walks the finished
//! tree once and produces markup text.
//!
//! DESIGN
//! ======
//! - Arguments are a closed enum, so exhaustiveness is checked at compile time.
//! - Attribute keys are unique per element; the last supplied value wins and
//!   the key keeps the position of its first occurrence.
//! - Construction errors (empty tag, empty attribute key, unsupported dynamic
//!   argument) bubble up through nested constructors as [`MarkupError`].
//!   Rendering itself cannot fail.
//!
//! ```
//! use markup::{args, render};
//! use markup::attrs::custom;
//! use markup::tags::div;
//!
//! # fn main() -> Result<(), markup::MarkupError> {
//! let node = div(args![
//!     custom("hx-get", "/api/todos"),
//!     custom("hx-trigger", "load"),
//!     "Loading...",
//! ])?;
//! assert_eq!(
//!     render(&node),
//!     r#"<div hx-get="/api/todos" hx-trigger="load">Loading...</div>"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod attr;
pub mod attrs;
pub mod error;
pub mod node;
pub mod render;
pub mod tags;

pub use attr::{AttrValue, Attribute, AttributeSet, Style};
pub use error::MarkupError;
pub use node::{Arg, Element, Markup, Node, raw, text};
pub use render::{escape_attr, escape_text, is_void, render, render_document};

/// Build a heterogeneous argument list for a tag constructor.
///
/// Every expression is converted with [`Arg::from`], so attributes, nodes,
/// strings, options and fallible child constructors can be mixed freely.
#[macro_export]
macro_rules! args {
    () => {
        [] as [$crate::Arg; 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Arg::from($arg)),+]
    };
}
