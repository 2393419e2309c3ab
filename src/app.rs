//! Todo Frontend App
//!
//! The list page. Owns the store and turns intents from the child
//! components into snapshot replacements.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddTodoForm, LogoutButton, TodoItem};
use crate::config;
use crate::models::TodoId;
use crate::state::{summary_line, WallClock};
use crate::store::{store_apply, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    log::info!("[APP] Mounted with {} todos", store.todos().with_untracked(|list| list.len()));

    let on_add = Callback::new(move |title: String| {
        store_apply(&store, |list| list.add(title, &mut WallClock));
    });
    let on_toggle = Callback::new(move |(id, completed): (TodoId, bool)| {
        store_apply(&store, |list| list.toggle_complete(id, completed));
    });
    let on_delete = Callback::new(move |id: TodoId| {
        store_apply(&store, |list| list.delete(id));
    });

    view! {
        <div class="page">
            <div class="todo-card">
                <header class="todo-header">
                    <h1>{config::PAGE_TITLE}</h1>
                    <LogoutButton />
                </header>

                <AddTodoForm on_add=on_add />

                <ul class="todo-list">
                    <For
                        each=move || store.todos().with(|list| list.as_slice().to_vec())
                        // Rows are not reactive, so a flag change must re-key the row
                        key=|todo| (todo.id, todo.completed)
                        children=move |todo| {
                            view! {
                                <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete />
                            }
                        }
                    />
                </ul>

                <p class="todo-summary">{move || store.todos().with(summary_line)}</p>
            </div>
        </div>
    }
}
