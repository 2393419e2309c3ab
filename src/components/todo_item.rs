//! Todo Item Component
//!
//! One row of the list.

use leptos::prelude::*;

use crate::config;
use crate::models::{Todo, TodoId};

pub fn row_class(completed: bool) -> &'static str {
    if completed { "todo-item completed" } else { "todo-item" }
}

pub fn title_class(completed: bool) -> &'static str {
    if completed { "todo-title line-through" } else { "todo-title" }
}

/// A single todo row. Clicking the title sends the inverted completion flag.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<(TodoId, bool)>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=row_class(completed) data-id=id.to_string()>
            <span
                class=title_class(completed)
                on:click=move |_| on_toggle.run((id, !completed))
            >
                {todo.title}
            </span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                {config::DELETE_LABEL}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_follow_completed() {
        assert_eq!(row_class(false), "todo-item");
        assert_eq!(row_class(true), "todo-item completed");
        assert_eq!(title_class(false), "todo-title");
        assert_eq!(title_class(true), "todo-title line-through");
    }
}
