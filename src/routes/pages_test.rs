use super::*;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use markup::render;
use time::macros::datetime;

async fn body_text(resp: Response) -> String {
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_is_a_full_document() {
    let body = body_text(index().await).await;

    assert!(body.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(body.contains(&format!("<title>{PAGE_TITLE}</title>")));
    assert!(body.contains(r#"<meta charset="UTF-8">"#));
    assert!(body.contains(r#"<script src="/js/htmx.min.js" defer></script>"#));
    assert!(body.ends_with("</html>"));
}

#[tokio::test]
async fn index_wires_todo_list_and_form() {
    let body = body_text(index().await).await;

    assert!(body.contains(
        r#"<div id="todo-list" class="todo-container" hx-get="/api/todos" hx-trigger="load" hx-swap="innerHTML"></div>"#
    ));
    assert!(body.contains(r##"<form hx-post="/api/todos" hx-target="#todo-list" hx-swap="beforeend""##));
    assert!(body.contains(r#"<input type="text" name="todo" placeholder="Add a todo..." required"#));
    assert!(body.contains(r#"hx-confirm="Delete all todos?""#));
    assert!(body.contains(r#"hx-trigger="every 2s""#));
}

#[test]
fn stylesheet_is_not_escaped() {
    let html = render(&page().unwrap());
    assert!(html.contains(".htmx-request .htmx-indicator { display: inline; }"));
    assert!(!html.contains("&gt;"));
}

#[tokio::test]
async fn content_fragment_links_to_more() {
    let body = body_text(content().await).await;
    assert!(body.starts_with("<div>"));
    assert!(body.contains("Content Loaded Successfully!"));
    assert!(body.contains(r##"hx-get="/api/more" hx-target="#content" hx-swap="innerHTML""##));
    assert!(!body.contains("<!DOCTYPE"));
}

#[tokio::test]
async fn more_fragment_lists_features() {
    let body = body_text(more().await).await;
    assert_eq!(body.matches("<li>").count(), 4);
    assert!(body.contains("Even More Content!"));
}

#[test]
fn list_icons_merge_styles() {
    let node = more_fragment().unwrap();
    let html = render(&node);
    assert!(html.contains(r##"style="margin-right: 6px; color: #10b981""##));
}

#[test]
fn timestamp_format_is_fixed_width() {
    assert_eq!(format_timestamp(datetime!(2024-03-05 07:08:09 UTC)), "2024-03-05 07:08:09");
}

#[test]
fn time_fragment_shows_utc_stamp() {
    let html = render(&time_fragment(datetime!(2025-12-31 23:59:59 UTC)).unwrap());
    assert!(html.contains("<strong>Current Time: </strong>2025-12-31 23:59:59 UTC"));
    assert!(html.contains("This updates every 2 seconds automatically!"));
}

#[tokio::test]
async fn time_handler_answers_fragment() {
    let body = body_text(current_time().await).await;
    assert!(body.contains("Current Time: "));
    assert!(body.contains(" UTC"));
}
