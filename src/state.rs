//! Todo List State
//!
//! The in-memory list and its transitions. Every transition returns a new
//! snapshot; the previous one is left untouched.

use chrono::Utc;

use crate::config;
use crate::models::{Todo, TodoId};

// ========================
// Id Sources
// ========================

/// Produces ids for newly added todos
pub trait IdSource {
    fn next_id(&mut self, existing: &[Todo]) -> TodoId;
}

/// Wall-clock milliseconds, bumped past the largest existing id on collision
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl IdSource for WallClock {
    fn next_id(&mut self, existing: &[Todo]) -> TodoId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        next_after(now, existing)
    }
}

/// Monotonic counter
#[derive(Debug, Clone, Copy)]
pub struct Sequential {
    next: u64,
}

impl Sequential {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for Sequential {
    fn next_id(&mut self, existing: &[Todo]) -> TodoId {
        let id = next_after(self.next, existing);
        self.next = id.get() + 1;
        id
    }
}

/// `candidate`, or one past the largest id in `existing` if that is not smaller
fn next_after(candidate: u64, existing: &[Todo]) -> TodoId {
    match existing.iter().map(|t| t.id.get()).max() {
        Some(max) if candidate <= max => TodoId(max.saturating_add(1)),
        _ => TodoId(candidate),
    }
}

// ========================
// Snapshot
// ========================

/// Ordered snapshot of todos, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// The fixed set every page load starts with
    pub fn seeded() -> Self {
        Self::new(config::seed_todos())
    }

    /// Append an active todo with a fresh id.
    ///
    /// The title is stored exactly as given. Rejecting blank titles is the
    /// caller's job (see `accept_title` in the add form).
    pub fn add(&self, title: impl Into<String>, ids: &mut impl IdSource) -> Self {
        let todo = Todo::new(ids.next_id(&self.todos), title);
        log::debug!("[STATE] add id={} title={:?}", todo.id, todo.title);
        let mut todos = Vec::with_capacity(self.todos.len() + 1);
        todos.extend(self.todos.iter().cloned());
        todos.push(todo);
        Self { todos }
    }

    /// Set `completed` on the entry with `id`; unknown ids leave the list unchanged
    pub fn toggle_complete(&self, id: TodoId, completed: bool) -> Self {
        log::debug!("[STATE] toggle id={} completed={}", id, completed);
        let todos = self
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    todo.with_completed(completed)
                } else {
                    todo.clone()
                }
            })
            .collect();
        Self { todos }
    }

    /// Remove the entry with `id`; unknown ids leave the list unchanged
    pub fn delete(&self, id: TodoId) -> Self {
        log::debug!("[STATE] delete id={}", id);
        let todos = self.todos.iter().filter(|todo| todo.id != id).cloned().collect();
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}

/// Summary shown under the list
pub fn summary_line(list: &TodoList) -> String {
    if list.is_empty() {
        config::EMPTY_SUMMARY.to_string()
    } else {
        format!("{} of {} remaining", list.remaining_count(), list.len())
    }
}
