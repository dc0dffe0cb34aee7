use super::*;

#[test]
fn bytes_are_stable_across_calls() {
    let first = javascript();
    let second = HTMX.bytes();
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(first, second);
}

#[test]
fn htmx_is_served_as_javascript() {
    assert_eq!(HTMX.mime_type(), "application/javascript");
    assert_eq!(HTMX.name(), "htmx.min.js");
}

#[test]
fn etag_is_quoted_hex_and_cached() {
    let etag = HTMX.etag();
    assert_eq!(etag.len(), 34);
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert!(etag[1..33].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(etag.as_ptr(), HTMX.etag().as_ptr());
}

#[test]
fn etag_differs_by_content() {
    static A: Asset = Asset::new("a.js", b"var a=1;", JAVASCRIPT_MIME);
    static B: Asset = Asset::new("b.js", b"var b=2;", JAVASCRIPT_MIME);
    assert_ne!(A.etag(), B.etag());
}

#[test]
fn empty_asset_fails_verification() {
    static EMPTY: Asset = Asset::new("empty.js", b"", JAVASCRIPT_MIME);
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.verify(), Err(HxError::MissingPayload { name: "empty.js" }));
}

#[cfg(htmx_bundled)]
#[test]
fn bundled_payload_looks_like_htmx() {
    assert_eq!(HTMX.verify(), Ok(()));
    let text = std::str::from_utf8(HTMX.bytes()).expect("htmx is utf-8");
    assert!(text.starts_with(HTMX_PREFIX), "unexpected prefix: {}", &text[..40.min(text.len())]);
    assert!(text.contains("htmx"));
    assert!(text.lines().count() <= 10, "payload does not look minified");
}

#[cfg(htmx_bundled)]
#[test]
fn bundled_payload_size_is_sane() {
    let len = HTMX.len();
    assert!(len > 30_000, "htmx bundle too small: {len} bytes");
    assert!(len < 100_000, "htmx bundle too large: {len} bytes");
}

#[cfg(not(htmx_bundled))]
#[test]
fn unbundled_payload_is_reported() {
    assert!(HTMX.is_empty());
    assert_eq!(HTMX.verify(), Err(HxError::MissingPayload { name: "htmx.min.js" }));
}
