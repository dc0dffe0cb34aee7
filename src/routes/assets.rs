//! Embedded static assets.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use hx::Asset;

/// The payload is immutable per build.
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// `GET /js/htmx.min.js`
pub async fn htmx_js(headers: HeaderMap) -> Response {
    serve(&hx::HTMX, &headers)
}

/// Serve an asset verbatim, answering 304 when the client already holds it.
pub fn serve(asset: &'static Asset, headers: &HeaderMap) -> Response {
    let etag = asset.etag();
    let cache_headers = [
        (CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE_CACHE)),
        (ETAG, header_value(etag)),
    ];

    if etag_matches(headers, etag) {
        return (StatusCode::NOT_MODIFIED, cache_headers).into_response();
    }

    (
        [(CONTENT_TYPE, HeaderValue::from_static(asset.mime_type()))],
        cache_headers,
        asset.bytes(),
    )
        .into_response()
}

fn header_value(etag: &str) -> HeaderValue {
    HeaderValue::from_str(etag).unwrap_or_else(|_| HeaderValue::from_static("\"\""))
}

/// `If-None-Match` may carry a list of tags or `*`.
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(IF_NONE_MATCH)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
