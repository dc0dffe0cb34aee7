//! htmx attribute helpers and the embedded htmx bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! htmx drives requests from `hx-*` attributes in server-rendered markup. This
//! crate emits those attributes as [`markup::Attribute`] values so they can be
//! mixed into any `markup` tag constructor, and ships the client library
//! itself so a server can serve it without a CDN.
//!
//! ```
//! use hx::{hx_get, hx_swap, hx_target};
//! use markup::{args, render, tags::button};
//!
//! # fn main() -> Result<(), markup::MarkupError> {
//! let node = button(args![
//!     hx_get("/api/content"),
//!     hx_target("#content"),
//!     hx_swap("innerHTML"),
//!     "Load Content",
//! ])?;
//! assert_eq!(
//!     render(&node),
//!     r##"<button hx-get="/api/content" hx-target="#content" hx-swap="innerHTML">Load Content</button>"##
//! );
//! # Ok(())
//! # }
//! ```

pub mod asset;
mod attrs;
mod error;
pub mod registry;

pub use asset::{Asset, HTMX, javascript};
pub use attrs::*;
pub use error::HxError;
pub use registry::{AttributeSpec, Behavior, HxValue, ValueRule, make, make_flag, make_named};
