//! Catalogue of htmx behaviors.
//!
//! DESIGN
//! ======
//! Each [`Behavior`] maps to one fixed wire key and one [`ValueRule`]. Raw
//! values are never validated: URLs, selectors, trigger expressions and JSON
//! payloads pass through verbatim so callers are not limited to a predicted
//! vocabulary. Boolean behaviors only ever emit `"true"` or `"false"`.

use std::fmt;
use std::str::FromStr;

use markup::Attribute;

use crate::error::HxError;

// =============================================================================
// VALUE RULES
// =============================================================================

/// How a caller-supplied value becomes the attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Pass-through.
    Raw,
    /// On/off switch rendered as `"true"` or `"false"`.
    Boolean,
    /// Always this literal, whatever the input.
    Fixed(&'static str),
}

/// Caller-supplied value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HxValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for HxValue {
    fn from(s: &str) -> Self {
        HxValue::Text(s.to_owned())
    }
}

impl From<String> for HxValue {
    fn from(s: String) -> Self {
        HxValue::Text(s)
    }
}

impl From<&String> for HxValue {
    fn from(s: &String) -> Self {
        HxValue::Text(s.clone())
    }
}

impl From<bool> for HxValue {
    fn from(b: bool) -> Self {
        HxValue::Flag(b)
    }
}

fn bool_literal(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

impl ValueRule {
    /// Attribute value for a flag input. Never fails: raw and boolean rules
    /// both render the literal.
    #[must_use]
    pub fn flag_value(self, on: bool) -> &'static str {
        match self {
            ValueRule::Fixed(literal) => literal,
            ValueRule::Raw | ValueRule::Boolean => bool_literal(on),
        }
    }

    /// Attribute value for `value` under this rule. `key` is only used to
    /// label the error.
    ///
    /// # Errors
    ///
    /// `InvalidFlag` when a boolean rule gets text other than `true`/`false`
    /// (ASCII case-insensitive).
    pub fn apply(self, key: &'static str, value: HxValue) -> Result<String, HxError> {
        match (self, value) {
            (_, HxValue::Flag(on)) => Ok(self.flag_value(on).to_owned()),
            (ValueRule::Fixed(literal), HxValue::Text(_)) => Ok(literal.to_owned()),
            (ValueRule::Raw, HxValue::Text(text)) => Ok(text),
            (ValueRule::Boolean, HxValue::Text(text)) => {
                if text.eq_ignore_ascii_case("true") {
                    Ok(bool_literal(true).to_owned())
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(bool_literal(false).to_owned())
                } else {
                    Err(HxError::InvalidFlag { key, value: text })
                }
            }
        }
    }
}

// =============================================================================
// BEHAVIORS
// =============================================================================

/// Definition-time description of one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Logical name, e.g. `"swap-oob"`.
    pub name: &'static str,
    /// Wire key, e.g. `"hx-swap-oob"`.
    pub key: &'static str,
    pub rule: ValueRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Target,
    Swap,
    SwapOob,
    Trigger,
    Indicator,
    DisabledElt,
    Headers,
    Vals,
    Include,
    Params,
    Boost,
    PushUrl,
    ReplaceUrl,
    Confirm,
    Prompt,
    Ext,
    Select,
    SelectOob,
    Sync,
    Encoding,
    Validate,
    Sse,
    Ws,
    Preserve,
    Disinherit,
}

const fn raw(name: &'static str, key: &'static str) -> AttributeSpec {
    AttributeSpec { name, key, rule: ValueRule::Raw }
}

impl Behavior {
    /// Every behavior, in catalogue order.
    pub const ALL: [Behavior; 30] = [
        Behavior::Get,
        Behavior::Post,
        Behavior::Put,
        Behavior::Delete,
        Behavior::Patch,
        Behavior::Target,
        Behavior::Swap,
        Behavior::SwapOob,
        Behavior::Trigger,
        Behavior::Indicator,
        Behavior::DisabledElt,
        Behavior::Headers,
        Behavior::Vals,
        Behavior::Include,
        Behavior::Params,
        Behavior::Boost,
        Behavior::PushUrl,
        Behavior::ReplaceUrl,
        Behavior::Confirm,
        Behavior::Prompt,
        Behavior::Ext,
        Behavior::Select,
        Behavior::SelectOob,
        Behavior::Sync,
        Behavior::Encoding,
        Behavior::Validate,
        Behavior::Sse,
        Behavior::Ws,
        Behavior::Preserve,
        Behavior::Disinherit,
    ];

    #[must_use]
    pub const fn spec(self) -> AttributeSpec {
        match self {
            Behavior::Get => raw("get", "hx-get"),
            Behavior::Post => raw("post", "hx-post"),
            Behavior::Put => raw("put", "hx-put"),
            Behavior::Delete => raw("delete", "hx-delete"),
            Behavior::Patch => raw("patch", "hx-patch"),
            Behavior::Target => raw("target", "hx-target"),
            Behavior::Swap => raw("swap", "hx-swap"),
            Behavior::SwapOob => raw("swap-oob", "hx-swap-oob"),
            Behavior::Trigger => raw("trigger", "hx-trigger"),
            Behavior::Indicator => raw("indicator", "hx-indicator"),
            Behavior::DisabledElt => raw("disabled-elt", "hx-disabled-elt"),
            Behavior::Headers => raw("headers", "hx-headers"),
            Behavior::Vals => raw("vals", "hx-vals"),
            Behavior::Include => raw("include", "hx-include"),
            Behavior::Params => raw("params", "hx-params"),
            Behavior::Boost => AttributeSpec { name: "boost", key: "hx-boost", rule: ValueRule::Boolean },
            Behavior::PushUrl => raw("push-url", "hx-push-url"),
            Behavior::ReplaceUrl => raw("replace-url", "hx-replace-url"),
            Behavior::Confirm => raw("confirm", "hx-confirm"),
            Behavior::Prompt => raw("prompt", "hx-prompt"),
            Behavior::Ext => raw("ext", "hx-ext"),
            Behavior::Select => raw("select", "hx-select"),
            Behavior::SelectOob => raw("select-oob", "hx-select-oob"),
            Behavior::Sync => raw("sync", "hx-sync"),
            Behavior::Encoding => raw("encoding", "hx-encoding"),
            Behavior::Validate => {
                AttributeSpec { name: "validate", key: "hx-validate", rule: ValueRule::Fixed("true") }
            }
            Behavior::Sse => raw("sse", "hx-sse"),
            Behavior::Ws => raw("ws", "hx-ws"),
            Behavior::Preserve => {
                AttributeSpec { name: "preserve", key: "hx-preserve", rule: ValueRule::Fixed("true") }
            }
            Behavior::Disinherit => raw("disinherit", "hx-disinherit"),
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        self.spec().key
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    #[must_use]
    pub const fn rule(self) -> ValueRule {
        self.spec().rule
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Behavior {
    type Err = HxError;

    /// Accepts the logical name (`"push-url"`) or the wire key (`"hx-push-url"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|b| b.name() == s || b.key() == s)
            .ok_or_else(|| HxError::UnknownBehavior(s.to_owned()))
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Build the attribute for `behavior`, applying its value rule.
///
/// # Errors
///
/// `InvalidFlag` when a boolean behavior gets text that is not a flag.
pub fn make(behavior: Behavior, value: impl Into<HxValue>) -> Result<Attribute, HxError> {
    let spec = behavior.spec();
    Ok(Attribute::new(spec.key, spec.rule.apply(spec.key, value.into())?))
}

/// Flag form of [`make`]; every rule accepts a flag.
pub fn make_flag(behavior: Behavior, on: bool) -> Attribute {
    let spec = behavior.spec();
    Attribute::new(spec.key, spec.rule.flag_value(on))
}

/// String-keyed form of [`make`].
///
/// # Errors
///
/// `UnknownBehavior` if `name` is neither a logical name nor a wire key,
/// `InvalidFlag` as for [`make`].
pub fn make_named(name: &str, value: impl Into<HxValue>) -> Result<Attribute, HxError> {
    let behavior: Behavior = name.parse()?;
    make(behavior, value)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
