//! Global Application State Store
//!
//! Uses Leptos reactive_stores. The root component owns the store; children
//! only ever see snapshots and send intents back through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current snapshot of the list
    pub todos: TodoList,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            todos: TodoList::seeded(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the current snapshot with the one `transition` derives from it
pub fn store_apply(store: &AppStore, transition: impl FnOnce(&TodoList) -> TodoList) {
    let next = store.todos().with_untracked(transition);
    log::debug!("[STORE] snapshot now has {} todos", next.len());
    store.todos().set(next);
}
