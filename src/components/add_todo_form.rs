//! Add Todo Form Component
//!
//! Single text input plus submit button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config;

/// Buffer contents to submit, or `None` when it is blank.
///
/// The raw buffer is passed on untrimmed.
pub fn accept_title(buffer: &str) -> Option<String> {
    if buffer.trim().is_empty() {
        None
    } else {
        Some(buffer.to_string())
    }
}

/// Form for adding todos to the end of the list
#[component]
pub fn AddTodoForm(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let (new_todo, set_new_todo) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = accept_title(&new_todo.get_untracked()) else {
            log::debug!("[FORM] ignoring blank submit");
            return;
        };
        on_add.run(title);
        set_new_todo.set(String::new());
    };

    view! {
        <form class="add-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder=config::INPUT_PLACEHOLDER
                prop:value=move || new_todo.get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        set_new_todo.set(input.value());
                    }
                }
            />
            <button type="submit">{config::ADD_LABEL}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_titles_rejected() {
        assert_eq!(accept_title(""), None);
        assert_eq!(accept_title("   "), None);
        assert_eq!(accept_title("\t\n"), None);
    }

    #[test]
    fn test_raw_title_passed_through() {
        assert_eq!(accept_title("Write tests"), Some("Write tests".to_string()));
        assert_eq!(accept_title("  x "), Some("  x ".to_string()));
    }
}
