//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! todo list lives in an explicitly owned `TodoStore` behind a `RwLock`, so
//! concurrent requests never observe a half-applied mutation. Ids come from a
//! monotonically increasing counter and are never reused, even after a clear.

use std::sync::Arc;

use tokio::sync::RwLock;

// =============================================================================
// TODO STORE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}

/// In-memory todo list. Deletion scans linearly; the demo list is small.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    last_id: u64,
}

impl TodoStore {
    /// Snapshot of all todos in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Append a todo. Blank text creates nothing.
    pub fn create(&mut self, text: &str) -> Option<Todo> {
        if text.trim().is_empty() {
            return None;
        }
        self.last_id += 1;
        let todo = Todo { id: self.last_id, text: text.to_owned() };
        self.todos.push(todo.clone());
        Some(todo)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            return false;
        };
        self.todos.remove(pos);
        true
    }

    /// Remove everything. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.todos.len();
        self.todos.clear();
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub todos: Arc<RwLock<TodoStore>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
