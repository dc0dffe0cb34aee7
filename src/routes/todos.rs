//! Todo list fragments.
//!
//! DESIGN
//! ======
//! Every mutation answers with markup htmx can swap in directly: the new item
//! for create (appended with `beforeend`), an empty body for deletes (the
//! button's `outerHTML` target disappears). Malformed ids and blank text are
//! ignored rather than rejected, since the page has nowhere to show an error.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use hx::{hx_delete, hx_swap, hx_target};
use markup::attrs::{class, style};
use markup::tags::{button, div, span};
use markup::{Markup, Node, args};
use serde::Deserialize;

use super::fragment;
use crate::icons;
use crate::state::{AppState, Todo};

#[derive(Debug, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub todo: String,
}

/// `GET /api/todos`
pub async fn list_todos(State(state): State<AppState>) -> Response {
    let todos = {
        let store = state.todos.read().await;
        tracing::debug!(count = store.len(), "listing todos");
        store.list()
    };
    fragment(todo_list(&todos))
}

/// `POST /api/todos`
pub async fn create_todo(State(state): State<AppState>, Form(form): Form<NewTodo>) -> Response {
    let created = state.todos.write().await.create(&form.todo);
    match created {
        Some(todo) => {
            tracing::debug!(id = todo.id, "todo created");
            fragment(todo_item(&todo))
        }
        None => empty(),
    }
}

/// `DELETE /api/todos`
pub async fn clear_todos(State(state): State<AppState>) -> Response {
    let removed = state.todos.write().await.clear();
    tracing::debug!(removed, "todos cleared");
    empty()
}

/// `DELETE /api/todos/{id}`
pub async fn delete_todo(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<u64>() else {
        tracing::debug!(%raw_id, "ignoring delete for malformed todo id");
        return empty();
    };
    let mut store = state.todos.write().await;
    let removed = store.delete(id);
    tracing::debug!(id, removed, now_empty = store.is_empty(), "todo delete");
    empty()
}

fn empty() -> Response {
    Html("").into_response()
}

pub(crate) fn todo_list(todos: &[Todo]) -> Markup {
    let items = todos.iter().map(todo_item).collect::<Result<Vec<Node>, _>>();
    div(args![items])
}

pub(crate) fn todo_item(todo: &Todo) -> Markup {
    div(args![
        class("todo-item"),
        span(args![
            icons::circle(args![
                class("size-4"),
                style("margin-right", "8px"),
                style("color", "#6b7280"),
            ]),
            format!("{}. {}", todo.id, todo.text),
        ]),
        button(args![
            icons::x(args![class("size-3"), style("margin-right", "4px")]),
            "Delete",
            hx_delete(format!("/api/todos/{}", todo.id)),
            hx_target("closest .todo-item"),
            hx_swap("outerHTML"),
            class("btn btn-danger"),
            style("font-size", "12px"),
            style("padding", "4px 8px"),
            style("display", "inline-flex"),
            style("align-items", "center"),
        ]),
    ])
}

#[cfg(test)]
#[path = "todos_test.rs"]
mod tests;
