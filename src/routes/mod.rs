//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page at `/` plus the fragment endpoints it calls through htmx. Every
//! `/api/*` handler returns an HTML fragment, never JSON. The htmx client is
//! served from the binary at `/js/htmx.min.js`.

pub mod assets;
pub mod pages;
pub mod todos;

use axum::Router;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{delete, get};
use markup::{MarkupError, Markup, render};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/js/htmx.min.js", get(assets::htmx_js))
        .route("/robots.txt", get(robots_txt))
        .route("/api/content", get(pages::content))
        .route("/api/more", get(pages::more))
        .route("/api/time", get(pages::current_time))
        .route(
            "/api/todos",
            get(todos::list_todos).post(todos::create_todo).delete(todos::clear_todos),
        )
        .route("/api/todos/{id}", delete(todos::delete_todo))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Render a fragment, or log and answer 500 if it failed to build.
pub(crate) fn fragment(markup: Markup) -> Response {
    match markup {
        Ok(node) => Html(render(&node)).into_response(),
        Err(e) => markup_error(&e),
    }
}

pub(crate) fn markup_error(err: &MarkupError) -> Response {
    tracing::error!(error = %err, "fragment construction failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
