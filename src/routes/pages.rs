//! Demo page and the static fragments it loads.

use axum::response::{Html, IntoResponse, Response};
use hx::{hx_confirm, hx_delete, hx_get, hx_post, hx_swap, hx_target, hx_trigger};
use markup::attrs::{
    charset, class, content as meta_content, defer, id, lang, name, placeholder, r#type, required,
    src, style,
};
use markup::tags::{
    body, button, div, form, h1, h2, head, head_style, head_title, html, input, li, main, meta, p,
    script, strong, ul,
};
use markup::{Arg, Markup, args, raw, render_document};
use time::OffsetDateTime;
use time::macros::format_description;

use super::{fragment, markup_error};
use crate::icons;

const PAGE_TITLE: &str = "htmx + markup demo";

const DESCRIPTION: &str = "Interactive demo of htmx attributes composed with type-safe HTML \
    generation in Rust: embedded JavaScript, a todo list and live updates.";

const STYLESHEET: &str = r"
body { font-family: system-ui, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
.container { background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0; }
.btn { background: #0056b3; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer; margin: 5px; display: inline-flex; align-items: center; }
.btn:hover { background: #004085; }
.btn-success { background: #1e7e34; color: white; }
.btn-success:hover { background: #155724; }
.btn-danger { background: #c82333; color: white; }
.btn-danger:hover { background: #a71e2a; }
.form-input { border: 1px solid #ccc; padding: 8px; border-radius: 4px; margin: 5px; }
.todo-container { min-height: 100px; background: white; border: 1px solid #ddd; padding: 10px; margin: 10px 0; border-radius: 4px; }
.todo-item { padding: 10px; border-bottom: 1px solid #eee; display: flex; justify-content: space-between; align-items: center; }
.htmx-indicator { display: none; }
.htmx-request .htmx-indicator { display: inline; }
.size-3 { width: 12px; height: 12px; }
.size-4 { width: 16px; height: 16px; }
.size-5 { width: 20px; height: 20px; }
.size-6 { width: 24px; height: 24px; }
.size-8 { width: 32px; height: 32px; }
svg { vertical-align: middle; }
h1, h2, h3 { display: flex; align-items: center; line-height: 1.2; }
h1 svg, h2 svg, h3 svg { flex-shrink: 0; }
p { display: flex; align-items: center; }
";

// =============================================================================
// PAGE
// =============================================================================

/// `GET /`
pub async fn index() -> Response {
    match page() {
        Ok(node) => Html(render_document(&node)).into_response(),
        Err(e) => markup_error(&e),
    }
}

pub(crate) fn page() -> Markup {
    html(args![
        lang("en"),
        head(args![
            head_title(args![PAGE_TITLE]),
            meta(args![charset("UTF-8")]),
            meta(args![name("viewport"), meta_content("width=device-width, initial-scale=1")]),
            meta(args![name("description"), meta_content(DESCRIPTION)]),
            head_style(args![raw(STYLESHEET)]),
        ]),
        body(args![
            h1(args![
                icons::zap(args![class("size-8"), style("margin-right", "10px")]),
                "htmx + markup integration demo",
            ]),
            p(args![
                "Attributes from the hx crate composed with type-safe markup, \
                 using the embedded htmx bundle (no CDN required).",
            ]),
            main(args![
                content_area(),
                load_content_button(),
                todo_section(),
                live_time(),
            ]),
            script(args![src("/js/htmx.min.js"), defer()]),
        ]),
    ])
}

fn content_area() -> Markup {
    div(args![
        id("content"),
        class("container"),
        h2(args![
            icons::monitor(args![class("size-6"), style("margin-right", "8px")]),
            "Dynamic Content Area",
        ]),
        p(args!["Click the button below to load content dynamically."]),
    ])
}

fn load_content_button() -> Markup {
    button(args![
        icons::download(args![class("size-4"), style("margin-right", "6px")]),
        "Load Content",
        hx_get("/api/content"),
        hx_target("#content"),
        hx_swap("innerHTML"),
        class("btn"),
    ])
}

fn todo_section() -> Markup {
    div(args![
        h2(args![
            icons::list_todo(args![class("size-6"), style("margin-right", "8px")]),
            "Todo List Demo",
        ]),
        div(args![
            id("todo-list"),
            class("todo-container"),
            hx_get("/api/todos"),
            hx_trigger("load"),
            hx_swap("innerHTML"),
        ]),
        form(args![
            hx_post("/api/todos"),
            hx_target("#todo-list"),
            hx_swap("beforeend"),
            style("display", "flex"),
            style("gap", "10px"),
            style("margin", "10px 0"),
            input(args![
                r#type("text"),
                name("todo"),
                placeholder("Add a todo..."),
                required(),
                class("form-input"),
                style("flex", "1"),
            ]),
            button(args![
                r#type("submit"),
                icons::plus(args![class("size-4"), style("margin-right", "6px")]),
                "Add Todo",
                class("btn btn-success"),
            ]),
        ]),
        button(args![
            icons::trash(args![class("size-4"), style("margin-right", "6px")]),
            "Clear All",
            hx_delete("/api/todos"),
            hx_target("#todo-list"),
            hx_confirm("Delete all todos?"),
            hx_swap("innerHTML"),
            class("btn btn-danger"),
            style("margin-top", "10px"),
        ]),
    ])
}

fn live_time() -> Markup {
    div(args![
        h2(args![
            icons::refresh(args![class("size-6"), style("margin-right", "8px")]),
            "Auto-refresh Demo",
        ]),
        div(args![
            id("live-time"),
            hx_get("/api/time"),
            hx_trigger("every 2s"),
            hx_swap("innerHTML"),
            class("container"),
            "Loading time...",
        ]),
    ])
}

// =============================================================================
// FRAGMENTS
// =============================================================================

/// `GET /api/content`
pub async fn content() -> Response {
    fragment(content_fragment())
}

pub(crate) fn content_fragment() -> Markup {
    div(args![
        h2(args![
            icons::circle_check(args![
                class("size-6"),
                style("margin-right", "8px"),
                style("color", "#10b981"),
            ]),
            "Content Loaded Successfully!",
        ]),
        p(args!["This content was loaded dynamically with htmx and rendered by the markup crate."]),
        p(args!["The htmx JavaScript is served directly from the Rust binary."]),
        button(args![
            icons::arrow_right(args![class("size-4"), style("margin-right", "6px")]),
            "Load More Content",
            hx_get("/api/more"),
            hx_target("#content"),
            hx_swap("innerHTML"),
            class("btn"),
        ]),
    ])
}

/// `GET /api/more`
pub async fn more() -> Response {
    fragment(more_fragment())
}

pub(crate) fn more_fragment() -> Markup {
    div(args![
        h2(args![
            icons::rocket(args![
                class("size-6"),
                style("margin-right", "8px"),
                style("color", "#f59e0b"),
            ]),
            "Even More Content!",
        ]),
        p(args!["Nested htmx requests work the same way as the first one."]),
        ul(args![
            li(args![icons::shield(list_icon("#10b981")), "Type-safe HTML construction"]),
            li(args![icons::zap(list_icon("#f59e0b")), "No template engine at runtime"]),
            li(args![icons::package(list_icon("#3b82f6")), "Embedded JavaScript assets"]),
            li(args![icons::heart(list_icon("#ef4444")), "Plain attributes for htmx"]),
        ]),
    ])
}

fn list_icon(color: &str) -> [Arg; 3] {
    args![class("size-4"), style("margin-right", "6px"), style("color", color)]
}

/// `GET /api/time`
pub async fn current_time() -> Response {
    fragment(time_fragment(OffsetDateTime::now_utc()))
}

pub(crate) fn format_timestamp(now: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    now.format(format).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "timestamp formatting failed");
        now.unix_timestamp().to_string()
    })
}

pub(crate) fn time_fragment(now: OffsetDateTime) -> Markup {
    div(args![
        p(args![
            icons::clock(args![
                class("size-5"),
                style("margin-right", "8px"),
                style("color", "#3b82f6"),
            ]),
            strong(args!["Current Time: "]),
            format!("{} UTC", format_timestamp(now)),
        ]),
        p(args![
            icons::rotate_ccw(args![
                class("size-4"),
                style("margin-right", "6px"),
                style("color", "#10b981"),
            ]),
            "This updates every 2 seconds automatically!",
        ]),
    ])
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
