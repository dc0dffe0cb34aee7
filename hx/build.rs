//! Detect the vendored htmx bundle.
//!
//! `assets/htmx.min.js` is embedded with `include_bytes!` only when present.
//! Without it the crate still builds, the payload is empty, and
//! `Asset::verify` reports the misconfiguration at process start. A file that
//! is present but is not a minified htmx build fails the build here.

use std::fs;
use std::path::Path;

const PAYLOAD: &str = "assets/htmx.min.js";
const PREFIX: &[u8] = b"var htmx=function()";

fn main() {
    println!("cargo::rustc-check-cfg=cfg(htmx_bundled)");
    println!("cargo::rerun-if-changed={PAYLOAD}");
    println!("cargo::rerun-if-changed=assets");

    if !Path::new(PAYLOAD).is_file() {
        println!("cargo::warning={PAYLOAD} not found; the embedded htmx payload will be empty");
        return;
    }

    let bytes = match fs::read(PAYLOAD) {
        Ok(bytes) => bytes,
        Err(e) => panic!("failed to read {PAYLOAD}: {e}"),
    };
    assert!(
        bytes.starts_with(PREFIX),
        "{PAYLOAD} does not start with `var htmx=function()`; expected the minified htmx dist file"
    );
    println!("cargo::rustc-cfg=htmx_bundled");
}
