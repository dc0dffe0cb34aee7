//! One helper per htmx behavior.

use markup::Attribute;

use crate::registry::{Behavior, make_flag};

/// Raw-rule behaviors pass text through unchanged.
fn raw(behavior: Behavior, value: String) -> Attribute {
    Attribute::new(behavior.key(), value)
}

// Requests.

/// `hx-get`: issue a GET to `url`.
pub fn hx_get(url: impl Into<String>) -> Attribute {
    raw(Behavior::Get, url.into())
}

/// `hx-post`: issue a POST to `url`.
pub fn hx_post(url: impl Into<String>) -> Attribute {
    raw(Behavior::Post, url.into())
}

pub fn hx_put(url: impl Into<String>) -> Attribute {
    raw(Behavior::Put, url.into())
}

pub fn hx_delete(url: impl Into<String>) -> Attribute {
    raw(Behavior::Delete, url.into())
}

pub fn hx_patch(url: impl Into<String>) -> Attribute {
    raw(Behavior::Patch, url.into())
}

// Targeting and swapping.

/// `hx-target`: where the response goes. Accepts htmx extended selectors such
/// as `closest .todo-item` or `this`.
pub fn hx_target(selector: impl Into<String>) -> Attribute {
    raw(Behavior::Target, selector.into())
}

/// `hx-swap`: `innerHTML`, `outerHTML`, `beforebegin`, `afterbegin`,
/// `beforeend`, `afterend`, `delete` or `none`, plus modifiers.
pub fn hx_swap(strategy: impl Into<String>) -> Attribute {
    raw(Behavior::Swap, strategy.into())
}

/// `hx-swap-oob`: mark a response fragment for an out-of-band swap.
pub fn hx_swap_oob(value: impl Into<String>) -> Attribute {
    raw(Behavior::SwapOob, value.into())
}

pub fn hx_select(selector: impl Into<String>) -> Attribute {
    raw(Behavior::Select, selector.into())
}

pub fn hx_select_oob(selector: impl Into<String>) -> Attribute {
    raw(Behavior::SelectOob, selector.into())
}

// Events.

/// `hx-trigger`: e.g. `click`, `load`, `revealed`, `every 2s`.
pub fn hx_trigger(event: impl Into<String>) -> Attribute {
    raw(Behavior::Trigger, event.into())
}

// Request lifecycle.

pub fn hx_indicator(selector: impl Into<String>) -> Attribute {
    raw(Behavior::Indicator, selector.into())
}

/// `hx-disabled-elt`: elements disabled while the request is in flight.
pub fn hx_disabled_elt(selector: impl Into<String>) -> Attribute {
    raw(Behavior::DisabledElt, selector.into())
}

/// `hx-sync`: `drop`, `abort`, `replace`, `queue`, optionally scoped to a
/// selector.
pub fn hx_sync(strategy: impl Into<String>) -> Attribute {
    raw(Behavior::Sync, strategy.into())
}

// Request parameters.

/// `hx-headers`: JSON object of extra request headers.
pub fn hx_headers(json: impl Into<String>) -> Attribute {
    raw(Behavior::Headers, json.into())
}

/// `hx-vals`: JSON object of extra request values.
pub fn hx_vals(json: impl Into<String>) -> Attribute {
    raw(Behavior::Vals, json.into())
}

pub fn hx_include(selector: impl Into<String>) -> Attribute {
    raw(Behavior::Include, selector.into())
}

/// `hx-params`: `*`, `none`, `not a,b` or a comma-separated list.
pub fn hx_params(params: impl Into<String>) -> Attribute {
    raw(Behavior::Params, params.into())
}

/// `hx-encoding`, usually `multipart/form-data`.
pub fn hx_encoding(encoding: impl Into<String>) -> Attribute {
    raw(Behavior::Encoding, encoding.into())
}

// History.

/// `hx-boost`: progressively enhance links and forms beneath this element.
pub fn hx_boost(enabled: bool) -> Attribute {
    make_flag(Behavior::Boost, enabled)
}

/// `hx-push-url`: `"true"`, `"false"` or an explicit URL.
pub fn hx_push_url(url: impl Into<String>) -> Attribute {
    raw(Behavior::PushUrl, url.into())
}

pub fn hx_replace_url(url: impl Into<String>) -> Attribute {
    raw(Behavior::ReplaceUrl, url.into())
}

// Dialogs.

pub fn hx_confirm(message: impl Into<String>) -> Attribute {
    raw(Behavior::Confirm, message.into())
}

pub fn hx_prompt(message: impl Into<String>) -> Attribute {
    raw(Behavior::Prompt, message.into())
}

// Extensions and transports.

/// `hx-ext`: comma-separated extension names, e.g. `json-enc`.
pub fn hx_ext(extensions: impl Into<String>) -> Attribute {
    raw(Behavior::Ext, extensions.into())
}

/// `hx-sse`, e.g. `connect:/events`.
pub fn hx_sse(value: impl Into<String>) -> Attribute {
    raw(Behavior::Sse, value.into())
}

/// `hx-ws`, e.g. `connect:/ws`.
pub fn hx_ws(value: impl Into<String>) -> Attribute {
    raw(Behavior::Ws, value.into())
}

// Flags.

/// `hx-validate="true"`: run form validation before the request.
pub fn hx_validate() -> Attribute {
    make_flag(Behavior::Validate, true)
}

/// `hx-preserve="true"`: keep this element untouched across swaps.
pub fn hx_preserve() -> Attribute {
    make_flag(Behavior::Preserve, true)
}

/// `hx-disinherit`: `*` or a space-separated list of attributes.
pub fn hx_disinherit(attrs: impl Into<String>) -> Attribute {
    raw(Behavior::Disinherit, attrs.into())
}

#[cfg(test)]
#[path = "attrs_test.rs"]
mod tests;
