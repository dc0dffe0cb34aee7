//! Construction-time failures.

/// Error raised while assembling a tree. Rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("unsupported argument of type `{type_name}`")]
    UnsupportedArgument { type_name: &'static str },
    #[error("element tag must not be empty")]
    EmptyTag,
    #[error("attribute key must not be empty (on <{tag}>)")]
    EmptyAttributeKey { tag: String },
}
