#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HxError {
    #[error("unknown htmx behavior: {0}")]
    UnknownBehavior(String),
    #[error("{key} expects true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("embedded asset `{name}` is empty; was it bundled at build time?")]
    MissingPayload { name: &'static str },
}
