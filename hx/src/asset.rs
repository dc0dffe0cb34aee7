//! Embedded htmx bundle.
//!
//! DESIGN
//! ======
//! The minified library is compiled into the binary and handed back as the
//! same `&'static [u8]` on every call. Nothing here sets transport headers;
//! callers pick content type and cache policy (the payload is immutable per
//! build, so it can be cached indefinitely). `verify` lets a server refuse to
//! start when the bundle was missing at build time.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::error::HxError;

#[cfg(htmx_bundled)]
static HTMX_MIN_JS: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/htmx.min.js"));

#[cfg(not(htmx_bundled))]
static HTMX_MIN_JS: &[u8] = &[];

/// Content type for JavaScript payloads.
pub const JAVASCRIPT_MIME: &str = "application/javascript";

/// Opening bytes of the minified htmx distribution.
pub const HTMX_PREFIX: &str = "var htmx=function()";

/// Static payload plus the metadata needed to serve it.
#[derive(Debug)]
pub struct Asset {
    name: &'static str,
    bytes: &'static [u8],
    mime_type: &'static str,
    etag: OnceLock<String>,
}

/// The htmx client library.
pub static HTMX: Asset = Asset::new("htmx.min.js", HTMX_MIN_JS, JAVASCRIPT_MIME);

/// Shorthand for `HTMX.bytes()`.
#[must_use]
pub fn javascript() -> &'static [u8] {
    HTMX.bytes()
}

impl Asset {
    #[must_use]
    pub const fn new(name: &'static str, bytes: &'static [u8], mime_type: &'static str) -> Self {
        Self { name, bytes, mime_type, etag: OnceLock::new() }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fail fast when the payload was not bundled.
    ///
    /// # Errors
    ///
    /// `MissingPayload` if the asset has no bytes.
    pub fn verify(&self) -> Result<(), HxError> {
        if self.bytes.is_empty() {
            return Err(HxError::MissingPayload { name: self.name });
        }
        Ok(())
    }

    /// Strong `ETag` (quoted) derived from the payload digest. Computed once.
    pub fn etag(&self) -> &str {
        self.etag.get_or_init(|| {
            let digest = Sha256::digest(self.bytes);
            let hex: String = digest.iter().take(16).map(|b| format!("{b:02x}")).collect();
            format!("\"{hex}\"")
        })
    }
}

#[cfg(test)]
#[path = "asset_test.rs"]
mod tests;
